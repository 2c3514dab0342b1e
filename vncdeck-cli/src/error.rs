//! CLI error types and exit codes.

use vncdeck_core::error::{ConfigError, LaunchError, StoreError, ValidationError, VncDeckError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, storage or duplicate names
    pub const GENERAL_ERROR: i32 = 1;
    /// Connection failure - connection not found or the viewer could not be
    /// started
    pub const CONNECTION_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection not found
    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    /// No connection has been launched yet
    #[error("No last used connection; pass a connection name")]
    NoLastUsed,

    /// A connection with the requested name already exists
    #[error("A connection with this name already exists: {0}")]
    DuplicateName(String),

    /// Invalid connection fields
    #[error("Invalid connection: {0}")]
    Validation(String),

    /// Connections could not be saved
    #[error("Storage error: {0}")]
    Storage(String),

    /// The viewer process could not be started
    #[error("Failed to launch the viewer: {0}")]
    Launch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        Self::Launch(err.to_string())
    }
}

impl From<VncDeckError> for CliError {
    fn from(err: VncDeckError) -> Self {
        match err {
            VncDeckError::Validation(e) => e.into(),
            VncDeckError::Store(e) => e.into(),
            VncDeckError::Launch(e) => e.into(),
            VncDeckError::Config(e) => e.into(),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, validation, storage, duplicates, IO)
    /// - 2: Connection failure (not found, no last used, launch failed)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionNotFound(_) | Self::NoLastUsed | Self::Launch(_) => {
                exit_codes::CONNECTION_FAILURE
            }
            Self::Config(_)
            | Self::DuplicateName(_)
            | Self::Validation(_)
            | Self::Storage(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
