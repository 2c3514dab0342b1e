//! Viewer status command.

use std::path::Path;

use crate::error::CliError;
use crate::util::{build_launcher, create_config_manager};

/// Viewer status command handler
pub fn cmd_viewer(config_path: Option<&Path>, viewer: Option<&Path>, json: bool) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let launcher = build_launcher(&config_manager, viewer)?;

    let status = launcher.status();

    if json {
        let output = serde_json::to_string_pretty(&status)
            .map_err(|e| CliError::Config(format!("Failed to serialize to JSON: {e}")))?;
        println!("{output}");
        return Ok(());
    }

    println!("Viewer:    {}", status.path.display());
    println!("Available: {}", if status.available { "yes" } else { "no" });
    println!(
        "Version:   {}",
        status.version.as_deref().filter(|v| !v.is_empty()).unwrap_or("unknown")
    );

    Ok(())
}
