//! Property-based tests for viewer command construction

use std::path::PathBuf;

use proptest::prelude::*;
use vncdeck_core::launcher::ViewerLauncher;
use vncdeck_core::models::Connection;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the command is `[exe, -User, user, user@host:port]` with a
    /// username and `[exe, host:port]` without one
    #[test]
    fn prop_command_shape(
        host in "[a-z][a-z0-9.-]{0,20}",
        port in 1i64..=65535,
        username in prop::option::of("[a-z][a-z0-9_]{0,10}"),
    ) {
        let launcher = ViewerLauncher::new(Some(PathBuf::from("/opt/TurboVNC/bin/vncviewer")));
        let conn = Connection::new("p", host.clone(), port)
            .expect("valid fields")
            .with_username(username.clone());

        let cmd = launcher.build_command(&conn);
        prop_assert_eq!(&cmd[0], "/opt/TurboVNC/bin/vncviewer");
        match username {
            Some(user) => {
                prop_assert_eq!(cmd.len(), 4);
                prop_assert_eq!(&cmd[1], "-User");
                prop_assert_eq!(&cmd[2], &user);
                prop_assert_eq!(&cmd[3], &format!("{user}@{host}:{port}"));
            }
            None => {
                prop_assert_eq!(cmd.len(), 2);
                prop_assert_eq!(&cmd[1], &format!("{host}:{port}"));
            }
        }
    }

    /// Property: the display field never reaches the command line
    #[test]
    fn prop_display_not_in_command(display in "[A-Za-z0-9:]{1,8}") {
        let launcher = ViewerLauncher::new(Some(PathBuf::from("vncviewer")));
        let plain = Connection::new("p", "h", 5900).expect("valid fields");
        let with_display = plain.clone().with_display(Some(display));

        prop_assert_eq!(launcher.build_command(&with_display), launcher.build_command(&plain));
    }
}
