//! Show connection details command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{create_config_manager, find_connection, open_store};

/// Show connection details command handler
pub fn cmd_show(config_path: Option<&Path>, name: &str) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    let connection = find_connection(&store, name)?;

    println!("Connection Details:");
    println!("  Name:     {}", connection.name());
    println!("  Host:     {}", connection.host());
    println!("  Port:     {}", connection.port());
    if let Some(user) = connection.username() {
        println!("  Username: {user}");
    }
    if let Some(display) = connection.display() {
        println!("  Display:  {display}");
    }
    println!("  Target:   {}", connection.target());

    if store
        .load_last_used()
        .is_some_and(|last| last.name() == connection.name())
    {
        println!("  Last used: yes");
    }

    Ok(())
}
