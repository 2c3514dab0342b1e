//! Application settings
//!
//! Settings live in an optional `settings.toml` next to the connection
//! files. Every field has a default, so a missing file or a partial file is
//! always usable.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tracing::TracingLevel;

/// Default timeout for viewer probes
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Upper bound for the viewer `--help`/`--version` timeout
pub const MAX_VIEWER_TIMEOUT_SECS: u64 = 300;

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Viewer executable settings
    pub viewer: ViewerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Viewer executable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Explicit viewer path; `~` and `$VAR` are expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Timeout for `--help`/`--version` probes, in seconds
    pub probe_timeout_secs: u64,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            path: None,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}

impl ViewerSettings {
    /// Returns the configured viewer path with `~` and environment
    /// variables expanded. Blank values count as unset.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let raw = self.path.as_deref().map(str::trim).filter(|p| !p.is_empty())?;
        let expanded = shellexpand::full(raw).map_or_else(
            |e| {
                tracing::warn!(path = %raw, error = %e, "Could not expand viewer path, using it verbatim");
                raw.to_string()
            },
            std::borrow::Cow::into_owned,
        );
        Some(PathBuf::from(expanded))
    }

    /// Probe timeout as a [`Duration`], clamped to
    /// `1..=`[`MAX_VIEWER_TIMEOUT_SECS`] seconds
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.clamp(1, MAX_VIEWER_TIMEOUT_SECS))
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level name: error, warn, info, debug or trace
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Parses the configured level, falling back to `warn`
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.level.parse().unwrap_or(TracingLevel::Warn)
    }
}
