//! Add connection command.

use std::path::Path;

use vncdeck_core::models::Connection;

use crate::error::CliError;
use crate::util::{create_config_manager, normalize_optional, open_store};

/// Parameters for the `add` command
pub struct AddParams<'a> {
    pub name: &'a str,
    pub host: &'a str,
    pub port: i64,
    pub user: Option<&'a str>,
    pub display: Option<&'a str>,
}

/// Add connection command handler
pub fn cmd_add(config_path: Option<&Path>, params: &AddParams<'_>) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    let connection = Connection::new(params.name.trim(), params.host.trim(), params.port)?
        .with_username(normalize_optional(params.user))
        .with_display(normalize_optional(params.display));

    if store.get_by_name(connection.name()).is_some() {
        return Err(CliError::DuplicateName(connection.name().to_string()));
    }

    store.add(&connection)?;

    println!("Added connection {connection}");

    Ok(())
}
