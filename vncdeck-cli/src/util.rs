//! Shared utility functions used across command modules.

use std::path::Path;

use vncdeck_core::config::ConfigManager;
use vncdeck_core::launcher::ViewerLauncher;
use vncdeck_core::models::Connection;
use vncdeck_core::store::ConnectionStore;
use vncdeck_core::tracing::TracingLevel;

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Opens the connection store in the config directory
pub fn open_store(config: &ConfigManager) -> Result<ConnectionStore, CliError> {
    ConnectionStore::from_config(config)
        .map_err(|e| CliError::Config(format!("Failed to open connection store: {e}")))
}

/// Builds the viewer launcher from `settings.toml` and the `--viewer` flag
pub fn build_launcher(
    config: &ConfigManager,
    viewer: Option<&Path>,
) -> Result<ViewerLauncher, CliError> {
    let settings = config.load_settings()?;
    Ok(ViewerLauncher::from_settings(
        &settings.viewer,
        viewer.map(Path::to_path_buf),
    ))
}

/// Log level from `settings.toml`, `warn` when it cannot be read
pub fn configured_log_level(config_path: Option<&Path>) -> TracingLevel {
    create_config_manager(config_path)
        .ok()
        .and_then(|config| config.load_settings().ok())
        .map_or(TracingLevel::Warn, |settings| settings.logging.tracing_level())
}

/// Find a connection by exact name
pub fn find_connection(store: &ConnectionStore, name: &str) -> Result<Connection, CliError> {
    store
        .get_by_name(name)
        .ok_or_else(|| CliError::ConnectionNotFound(name.to_string()))
}

/// Trims free-text input; blank becomes `None`
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
