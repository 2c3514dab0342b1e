//! Config directory resolution and settings loading

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::fs::read_optional;

use super::settings::AppSettings;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "VNCDECK_CONFIG_DIR";

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "vncdeck";

const SETTINGS_FILE: &str = "settings.toml";

/// Owns the per-user configuration directory.
///
/// The directory is an explicit value: front ends resolve it once and hand
/// it to [`crate::store::ConnectionStore`], so tests can point everything at
/// a temporary directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Resolves the default config directory.
    ///
    /// Uses `$VNCDECK_CONFIG_DIR` when set and non-empty, otherwise
    /// `<platform config dir>/vncdeck` (for example `~/.config/vncdeck`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has no config
    /// directory and the override is not set.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }

        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_DIR_NAME);
        Ok(Self::with_config_dir(config_dir))
    }

    /// Uses an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// The configuration directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of `settings.toml`
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.settings_file();
        let content = read_optional(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let Some(content) = content else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(AppSettings::default());
        };

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path,
            message: e.to_string(),
        })
    }
}
