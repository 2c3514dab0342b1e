//! Error types for `VncDeck`
//!
//! Each component owns a focused error enum; [`VncDeckError`] wraps them for
//! front ends that want a single type.

use std::path::PathBuf;

use thiserror::Error;

/// Raised when a connection field violates its constraint.
///
/// Always recoverable: the caller rejects the input and keeps prior state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("Connection name cannot be empty")]
    EmptyName,

    /// Host is empty or whitespace only
    #[error("Host cannot be empty")]
    EmptyHost,

    /// Port outside 1..=65535
    #[error("Port must be between 1 and 65535 (got {0})")]
    PortOutOfRange(i64),

    /// A required key is missing from a serialized record
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A serialized record has the wrong shape or field types
    #[error("Malformed connection record: {0}")]
    Malformed(String),
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Write-side failures of the connection store.
///
/// Read-side corruption is never reported through this type; see
/// [`crate::store::ConnectionStore::list`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage directory could not be created
    #[error("Failed to create storage directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized
    #[error("Failed to serialize connections: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons a viewer process could not be started
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The executable does not exist or is not on `PATH`
    #[error("Viewer not found at '{}'", .0.display())]
    NotFound(PathBuf),

    /// The OS refused to execute the binary
    #[error("Permission denied executing '{}'", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other spawn failure
    #[error("Failed to start viewer '{}': {source}", .path.display())]
    Spawn {
        /// Executable that failed to start
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Classifies a spawn error for the given executable
    #[must_use]
    pub fn from_spawn(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Spawn { path, source: err },
        }
    }
}

/// Result type for launch operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Settings and config-directory errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No per-user configuration directory is available on this platform
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    /// Settings file exists but could not be read
    #[error("Failed to read settings {}: {source}", .path.display())]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`crate::config::AppSettings`]
    #[error("Failed to parse settings {}: {message}", .path.display())]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Umbrella error for front ends
#[derive(Debug, Error)]
pub enum VncDeckError {
    /// Invalid connection data
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store write failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Viewer start failure
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Settings failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}
