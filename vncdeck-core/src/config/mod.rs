//! Configuration management for `VncDeck`
//!
//! This module resolves the per-user configuration directory and loads the
//! optional `settings.toml` file.

mod manager;
pub mod settings;

pub use manager::{APP_DIR_NAME, CONFIG_DIR_ENV, ConfigManager};
pub use settings::{
    AppSettings, DEFAULT_PROBE_TIMEOUT_SECS, LoggingSettings, MAX_VIEWER_TIMEOUT_SECS,
    ViewerSettings,
};
