//! Delete connection command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{create_config_manager, open_store};

/// Delete connection command handler
pub fn cmd_delete(config_path: Option<&Path>, name: &str) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    if !store.delete(name)? {
        return Err(CliError::ConnectionNotFound(name.to_string()));
    }

    println!("Deleted connection '{name}'");

    Ok(())
}
