//! Connection profile model
//!
//! A [`Connection`] describes one VNC server. Fields are private so a value
//! can only be obtained through validation; there is no way to observe an
//! invalid connection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Default VNC port used when a record does not specify one
pub const DEFAULT_VNC_PORT: u16 = 5900;

/// A named, validated VNC connection profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConnectionRecord")]
pub struct Connection {
    name: String,
    host: String,
    port: u16,
    username: Option<String>,
    display: Option<String>,
}

impl Connection {
    /// Creates a new connection, validating every field.
    ///
    /// The port is accepted as a wide signed integer so that out-of-range
    /// input (`0`, `-1`, `65536`) is reported rather than truncated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name or host is empty or
    /// whitespace-only, or if the port is outside `1..=65535`.
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: i64) -> ValidationResult<Self> {
        let name = name.into();
        let host = host.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if host.trim().is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        let port = validate_port(port)?;

        Ok(Self {
            name,
            host,
            port,
            username: None,
            display: None,
        })
    }

    /// Creates a new connection on the default VNC port
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name or host is empty.
    pub fn with_defaults(name: impl Into<String>, host: impl Into<String>) -> ValidationResult<Self> {
        Self::new(name, host, i64::from(DEFAULT_VNC_PORT))
    }

    /// Sets the optional username
    #[must_use]
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Sets the optional display
    #[must_use]
    pub fn with_display(mut self, display: Option<String>) -> Self {
        self.display = display;
        self
    }

    /// Connection name, the unique key within a store
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Remote port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Username exactly as stored
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Display exactly as stored. Not used when launching.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Username to log in with; an empty string counts as absent
    pub fn effective_username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Target string passed to the viewer: `user@host:port` or `host:port`
    pub fn target(&self) -> String {
        match self.effective_username() {
            Some(user) => format!("{user}@{}:{}", self.host, self.port),
            None => format!("{}:{}", self.host, self.port),
        }
    }

    /// Returns the serialized mapping as a JSON value
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Builds a connection from a JSON mapping, applying full validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` or `host` is
    /// absent, [`ValidationError::Malformed`] when the value has the wrong
    /// shape, and the usual field errors otherwise.
    pub fn from_json_value(value: serde_json::Value) -> ValidationResult<Self> {
        let record: ConnectionRecord = serde_json::from_value(value)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;
        Self::try_from(record)
    }

    /// Converts back into an editable record
    #[must_use]
    pub fn to_record(&self) -> ConnectionRecord {
        ConnectionRecord {
            name: Some(self.name.clone()),
            host: Some(self.host.clone()),
            port: Some(i64::from(self.port)),
            username: self.username.clone(),
            display: self.display.clone(),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effective_username() {
            Some(user) => write!(f, "{} ({user}@{}:{})", self.name, self.host, self.port),
            None => write!(f, "{} ({}:{})", self.name, self.host, self.port),
        }
    }
}

/// Unvalidated connection fields, as read from disk or collected from input.
///
/// Every field is optional; [`Connection::try_from`] decides what is
/// required and fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Connection name (required)
    pub name: Option<String>,
    /// Remote host (required)
    pub host: Option<String>,
    /// Remote port; absent or `null` means [`DEFAULT_VNC_PORT`]
    pub port: Option<i64>,
    /// Optional username
    pub username: Option<String>,
    /// Optional display
    pub display: Option<String>,
}

impl TryFrom<ConnectionRecord> for Connection {
    type Error = ValidationError;

    fn try_from(record: ConnectionRecord) -> ValidationResult<Self> {
        let name = record.name.ok_or(ValidationError::MissingField("name"))?;
        let host = record.host.ok_or(ValidationError::MissingField("host"))?;
        let port = record.port.unwrap_or_else(|| i64::from(DEFAULT_VNC_PORT));

        Ok(Self::new(name, host, port)?
            .with_username(record.username)
            .with_display(record.display))
    }
}

/// Checks that a port lies in `1..=65535`
///
/// # Errors
///
/// Returns [`ValidationError::PortOutOfRange`] otherwise.
pub fn validate_port(port: i64) -> ValidationResult<u16> {
    u16::try_from(port)
        .ok()
        .filter(|p| *p != 0)
        .ok_or(ValidationError::PortOutOfRange(port))
}
