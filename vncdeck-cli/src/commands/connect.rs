//! Connect command — launch the viewer for a saved connection.

use std::path::Path;

use crate::error::CliError;
use crate::format::format_command;
use crate::util::{build_launcher, create_config_manager, find_connection, open_store};

/// Connect command handler
///
/// Without a name the last used connection is opened again. The last-used
/// marker is written before the viewer starts, so it is kept even if the
/// launch fails.
pub fn cmd_connect(
    config_path: Option<&Path>,
    viewer: Option<&Path>,
    name: Option<&str>,
    dry_run: bool,
) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    let connection = match name {
        Some(name) => find_connection(&store, name)?,
        None => store.load_last_used().ok_or(CliError::NoLastUsed)?,
    };

    let launcher = build_launcher(&config_manager, viewer)?;

    if dry_run {
        tracing::debug!(connection = %connection.name(), "Dry run, viewer not started");
        println!("{}", format_command(&launcher.build_command(&connection)));
        return Ok(());
    }

    store.save_last_used(&connection)?;

    println!("Connecting to {connection}...");

    let pid = launcher.try_launch(&connection)?;
    println!("Viewer started (PID {pid})");

    Ok(())
}
