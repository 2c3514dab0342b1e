//! Core data models
//!
//! This module contains the connection profile type and its unvalidated
//! record counterpart used for (de)serialization and editing.

mod connection;

pub use connection::{Connection, ConnectionRecord, DEFAULT_VNC_PORT, validate_port};
