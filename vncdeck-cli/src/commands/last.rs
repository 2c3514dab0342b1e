//! Last used connection command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{create_config_manager, open_store};

/// Last used connection command handler
pub fn cmd_last(config_path: Option<&Path>) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    match store.load_last_used() {
        Some(connection) => println!("{connection}"),
        None => println!("No connection has been used yet."),
    }

    Ok(())
}
