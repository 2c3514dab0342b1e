//! Update connection command.

use std::path::Path;

use vncdeck_core::models::Connection;

use crate::error::CliError;
use crate::util::{create_config_manager, find_connection, normalize_optional, open_store};

/// Parameters for the `update` command
pub struct UpdateParams<'a> {
    pub name: &'a str,
    pub new_name: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<i64>,
    pub user: Option<&'a str>,
    pub display: Option<&'a str>,
    pub clear_user: bool,
    pub clear_display: bool,
}

/// Update connection command handler
pub fn cmd_update(config_path: Option<&Path>, params: &UpdateParams<'_>) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = open_store(&config_manager)?;

    let existing = find_connection(&store, params.name)?;
    let mut record = existing.to_record();

    if let Some(new_name) = params.new_name {
        record.name = Some(new_name.trim().to_string());
    }
    if let Some(host) = params.host {
        record.host = Some(host.trim().to_string());
    }
    if let Some(port) = params.port {
        record.port = Some(port);
    }
    if params.clear_user {
        record.username = None;
    } else if params.user.is_some() {
        record.username = normalize_optional(params.user);
    }
    if params.clear_display {
        record.display = None;
    } else if params.display.is_some() {
        record.display = normalize_optional(params.display);
    }

    let updated = Connection::try_from(record)?;

    if updated.name() != existing.name() && store.get_by_name(updated.name()).is_some() {
        return Err(CliError::DuplicateName(updated.name().to_string()));
    }

    if !store.update(existing.name(), updated.clone())? {
        return Err(CliError::ConnectionNotFound(params.name.to_string()));
    }

    println!("Updated connection {updated}");

    Ok(())
}
