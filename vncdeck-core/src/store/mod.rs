//! Connection persistence
//!
//! [`ConnectionStore`] keeps the ordered connection list and the "last used"
//! snapshot in two pretty-printed JSON files. Every operation reads the
//! whole artifact fresh from disk, transforms it in memory and rewrites it;
//! nothing is cached between calls.
//!
//! Reads never fail. A missing, unreadable or corrupt artifact loads as an
//! empty list (or no last-used record) and a warning is logged, so callers
//! cannot tell corruption apart from "no data yet". Writes are atomic but
//! unlocked: concurrent writers race and the last one wins.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ConfigManager;
use crate::error::{StoreError, StoreResult};
use crate::fs::{read_optional, write_atomic};
use crate::models::Connection;
use crate::tracing::span_names;

/// File holding the ordered connection list
pub const CONNECTIONS_FILE: &str = "connections.json";

/// File holding the last used connection
pub const LAST_CONNECTION_FILE: &str = "last_connection.json";

/// File-backed store of named connections
#[derive(Debug, Clone)]
pub struct ConnectionStore {
    config_dir: PathBuf,
    connections_file: PathBuf,
    last_connection_file: PathBuf,
}

impl ConnectionStore {
    /// Opens a store in `config_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CreateDir`] if the directory cannot be created.
    pub fn open(config_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let config_dir = config_dir.into();
        std::fs::create_dir_all(&config_dir).map_err(|source| StoreError::CreateDir {
            path: config_dir.clone(),
            source,
        })?;

        Ok(Self {
            connections_file: config_dir.join(CONNECTIONS_FILE),
            last_connection_file: config_dir.join(LAST_CONNECTION_FILE),
            config_dir,
        })
    }

    /// Opens a store in the directory managed by `config`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CreateDir`] if the directory cannot be created.
    pub fn from_config(config: &ConfigManager) -> StoreResult<Self> {
        Self::open(config.config_dir())
    }

    /// Directory holding both artifacts
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the connection list artifact
    pub fn connections_file(&self) -> &Path {
        &self.connections_file
    }

    /// Path of the last-used artifact
    pub fn last_connection_file(&self) -> &Path {
        &self.last_connection_file
    }

    /// Returns all stored connections in insertion order.
    ///
    /// Missing or corrupt data yields an empty list.
    pub fn list(&self) -> Vec<Connection> {
        self.read_artifact(&self.connections_file)
            .unwrap_or_default()
    }

    /// Appends a connection and rewrites the list.
    ///
    /// Names are not checked for uniqueness here; that is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    pub fn add(&self, connection: &Connection) -> StoreResult<()> {
        let mut connections = self.list();
        connections.push(connection.clone());
        self.save_all(&connections)?;

        tracing::info!(name = %connection.name(), total = connections.len(), "Connection added");
        Ok(())
    }

    /// Replaces the first connection named `old_name`, keeping its position.
    ///
    /// Returns `Ok(false)` without writing anything if no connection matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    pub fn update(&self, old_name: &str, new_connection: Connection) -> StoreResult<bool> {
        let mut connections = self.list();
        let Some(slot) = connections.iter_mut().find(|c| c.name() == old_name) else {
            tracing::debug!(name = %old_name, "Update skipped, no matching connection");
            return Ok(false);
        };

        let new_name = new_connection.name().to_string();
        *slot = new_connection;
        self.save_all(&connections)?;

        tracing::info!(old_name = %old_name, new_name = %new_name, "Connection updated");
        Ok(true)
    }

    /// Removes every connection named `name`.
    ///
    /// The list is only rewritten when something was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    pub fn delete(&self, name: &str) -> StoreResult<bool> {
        let mut connections = self.list();
        let before = connections.len();
        connections.retain(|c| c.name() != name);

        let removed = before - connections.len();
        if removed == 0 {
            tracing::debug!(name = %name, "Delete skipped, no matching connection");
            return Ok(false);
        }

        self.save_all(&connections)?;
        tracing::info!(name = %name, removed, "Connection deleted");
        Ok(true)
    }

    /// Returns the first connection named `name`
    pub fn get_by_name(&self, name: &str) -> Option<Connection> {
        self.list().into_iter().find(|c| c.name() == name)
    }

    /// Overwrites the last-used snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn save_last_used(&self, connection: &Connection) -> StoreResult<()> {
        self.write_artifact(&self.last_connection_file, connection)?;
        tracing::debug!(name = %connection.name(), "Last used connection saved");
        Ok(())
    }

    /// Returns the last-used snapshot, if one exists and is valid
    pub fn load_last_used(&self) -> Option<Connection> {
        self.read_artifact(&self.last_connection_file)
    }

    fn save_all(&self, connections: &[Connection]) -> StoreResult<()> {
        self.write_artifact(&self.connections_file, connections)
    }

    fn write_artifact<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> StoreResult<()> {
        let _span = crate::trace_operation_debug!(span_names::STORE_SAVE, path = %path.display())
            .entered();

        let mut content = serde_json::to_string_pretty(value)?;
        content.push('\n');

        write_atomic(path, content.as_bytes()).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Human name of an artifact for log messages
    fn artifact_label(&self, path: &Path) -> &'static str {
        if path == self.last_connection_file {
            "last used connection"
        } else {
            "connection list"
        }
    }

    fn read_artifact<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        let _span = crate::trace_operation_debug!(span_names::STORE_LOAD, path = %path.display())
            .entered();

        let content = match read_optional(path) {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(
                    artifact = self.artifact_label(path),
                    path = %path.display(),
                    error = %e,
                    "Stored data is unreadable, treating it as absent"
                );
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    artifact = self.artifact_label(path),
                    path = %path.display(),
                    error = %e,
                    "Stored data is corrupt, treating it as absent"
                );
                None
            }
        }
    }
}
