//! Property-based tests for the connection model
//!
//! A connection built from valid input survives a JSON round trip and every
//! out-of-range port or blank name/host is rejected.

use proptest::prelude::*;
use serde_json::json;
use vncdeck_core::error::ValidationError;
use vncdeck_core::models::{Connection, DEFAULT_VNC_PORT};

// ============================================================================
// Generators
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 _-]{0,30}"
}

fn arb_host() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,20}(\\.[a-z]{2,6})?",
        (1u8..=254, 0u8..=255, 0u8..=255, 1u8..=254).prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
    ]
}

fn arb_optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z0-9:._-]{0,12}")
}

fn arb_connection() -> impl Strategy<Value = Connection> {
    (arb_name(), arb_host(), 1i64..=65535, arb_optional_text(), arb_optional_text()).prop_map(
        |(name, host, port, username, display)| {
            Connection::new(name, host, port)
                .expect("generated fields are valid")
                .with_username(username)
                .with_display(display)
        },
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: serialization preserves every field
    #[test]
    fn prop_json_round_trip(conn in arb_connection()) {
        let value = conn.to_json_value().expect("serializes");
        let back = Connection::from_json_value(value).expect("valid mapping");
        prop_assert_eq!(back, conn);
    }

    /// Property: ports outside 1..=65535 are rejected with the offending value
    #[test]
    fn prop_invalid_ports_rejected(
        port in prop_oneof![i64::MIN..=0i64, 65536i64..=i64::MAX]
    ) {
        let result = Connection::new("name", "host", port);
        prop_assert_eq!(result, Err(ValidationError::PortOutOfRange(port)));
    }

    /// Property: every port in range is accepted unchanged
    #[test]
    fn prop_valid_ports_accepted(port in 1i64..=65535) {
        let conn = Connection::new("name", "host", port).expect("valid port");
        prop_assert_eq!(i64::from(conn.port()), port);
    }

    /// Property: whitespace-only names and hosts are rejected
    #[test]
    fn prop_blank_fields_rejected(blank in "[ \t\n]{0,5}", host in arb_host()) {
        prop_assert_eq!(
            Connection::new(blank.clone(), host.clone(), 5900),
            Err(ValidationError::EmptyName)
        );
        prop_assert_eq!(
            Connection::new("name", blank, 5900),
            Err(ValidationError::EmptyHost)
        );
    }

    /// Property: target is `user@host:port` exactly when a non-empty username is set
    #[test]
    fn prop_target_format(conn in arb_connection()) {
        let expected = match conn.username().filter(|u| !u.is_empty()) {
            Some(user) => format!("{user}@{}:{}", conn.host(), conn.port()),
            None => format!("{}:{}", conn.host(), conn.port()),
        };
        let suffix = format!("({expected})");
        prop_assert_eq!(conn.target(), expected);
        prop_assert!(conn.to_string().ends_with(&suffix));
    }

    /// Property: a missing or null port reads as the default
    #[test]
    fn prop_missing_port_defaults(name in arb_name(), host in arb_host(), null_port in any::<bool>()) {
        let value = if null_port {
            json!({ "name": name, "host": host, "port": null })
        } else {
            json!({ "name": name, "host": host })
        };
        let conn = Connection::from_json_value(value).expect("valid mapping");
        prop_assert_eq!(conn.port(), DEFAULT_VNC_PORT);
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_missing_required_fields() {
    assert_eq!(
        Connection::from_json_value(json!({ "host": "h" })),
        Err(ValidationError::MissingField("name"))
    );
    assert_eq!(
        Connection::from_json_value(json!({ "name": "n", "port": 5900 })),
        Err(ValidationError::MissingField("host"))
    );
}

#[test]
fn test_wrong_shape_is_malformed() {
    assert!(matches!(
        Connection::from_json_value(json!(["not", "a", "mapping"])),
        Err(ValidationError::Malformed(_))
    ));
    assert!(matches!(
        Connection::from_json_value(json!({ "name": "n", "host": "h", "port": "5900" })),
        Err(ValidationError::Malformed(_))
    ));
}
