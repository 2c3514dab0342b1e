//! `VncDeck` Core Library
//!
//! This crate provides the core of the `VncDeck` connection manager: named
//! VNC connection profiles, their JSON persistence, and launching the
//! TurboVNC viewer for a profile.
//!
//! # Crate Structure
//!
//! - [`models`] - The validated [`Connection`] entity
//! - [`store`] - JSON-file persistence of connections and the last-used marker
//! - [`launcher`] - Viewer resolution, launch and availability probes
//! - [`config`] - Config directory and `settings.toml`
//! - [`tracing`] - Structured logging setup
//! - [`error`] - Error types shared by the above

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fs;
pub mod launcher;
pub mod models;
pub mod store;
pub mod tracing;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use config::{AppSettings, ConfigManager, LoggingSettings, ViewerSettings};
pub use error::{
    ConfigError, ConfigResult, LaunchError, LaunchResult, StoreError, StoreResult,
    ValidationError, ValidationResult, VncDeckError,
};
pub use launcher::{
    DEFAULT_PROBE_TIMEOUT, DEFAULT_VIEWER_PATH, VIEWER_COMMAND, ViewerLauncher, ViewerStatus,
    resolve_executable,
};
pub use models::{Connection, ConnectionRecord, DEFAULT_VNC_PORT, validate_port};
pub use store::{CONNECTIONS_FILE, ConnectionStore, LAST_CONNECTION_FILE};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};
