//! External viewer launcher
//!
//! Resolves the TurboVNC `vncviewer` executable once, turns a
//! [`Connection`] into its command line and starts it detached. The
//! `--help` and `--version` probes run under a bounded timeout.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::{MAX_VIEWER_TIMEOUT_SECS, ViewerSettings};
use crate::error::{LaunchError, LaunchResult};
use crate::models::Connection;
use crate::tracing::span_names;

/// Well-known TurboVNC install location
pub const DEFAULT_VIEWER_PATH: &str = "/opt/TurboVNC/bin/vncviewer";

/// Bare command used when the well-known path is unusable
pub const VIEWER_COMMAND: &str = "vncviewer";

/// Default timeout for `--help` / `--version` probes
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_VIEWER_TIMEOUT: Duration = Duration::from_secs(MAX_VIEWER_TIMEOUT_SECS);

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How long pipe readers get after the child has exited
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Snapshot of the viewer installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerStatus {
    /// Resolved executable
    pub path: PathBuf,
    /// Whether the `--help` probe produced output
    pub available: bool,
    /// Trimmed `--version` output, if the probe succeeded
    pub version: Option<String>,
}

/// Starts the external viewer for connections
#[derive(Debug, Clone)]
pub struct ViewerLauncher {
    executable: PathBuf,
    probe_timeout: Duration,
}

impl ViewerLauncher {
    /// Creates a launcher, resolving the executable now.
    ///
    /// See [`resolve_executable`] for the lookup order.
    #[must_use]
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self {
            executable: resolve_executable(explicit_path),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Creates a launcher from settings; `override_path` wins over the
    /// configured path.
    #[must_use]
    pub fn from_settings(settings: &ViewerSettings, override_path: Option<PathBuf>) -> Self {
        Self::new(override_path.or_else(|| settings.resolved_path()))
            .with_probe_timeout(settings.probe_timeout())
    }

    /// Sets the `--help`/`--version` timeout, capped at [`MAX_VIEWER_TIMEOUT_SECS`]
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout.min(MAX_VIEWER_TIMEOUT);
        self
    }

    /// The resolved viewer executable
    #[must_use]
    pub fn detected_path(&self) -> &Path {
        &self.executable
    }

    /// The probe timeout
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    /// Builds `[executable, ("-User", username)?, target]`.
    ///
    /// The username appears both as `-User` and in the target, which is
    /// what TurboVNC expects for its own credential prompt.
    #[must_use]
    pub fn build_command(&self, connection: &Connection) -> Vec<String> {
        let mut cmd = vec![self.executable.to_string_lossy().into_owned()];
        if let Some(user) = connection.effective_username() {
            cmd.push("-User".to_string());
            cmd.push(user.to_string());
        }
        cmd.push(connection.target());
        cmd
    }

    /// Starts the viewer detached and returns its process id.
    ///
    /// The child gets no stdio and is never waited on.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] classifying why the process did not start.
    pub fn try_launch(&self, connection: &Connection) -> LaunchResult<u32> {
        let _span = crate::trace_operation!(
            span_names::VIEWER_LAUNCH,
            connection = %connection.name(),
            executable = %self.executable.display()
        )
        .entered();

        let argv = self.build_command(connection);
        let mut command = Command::new(&self.executable);
        command
            .args(argv.iter().skip(1))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Keep terminal signals (Ctrl-C) of the front end away from the viewer
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command
            .spawn()
            .map_err(|e| LaunchError::from_spawn(self.executable.clone(), e))?;

        let pid = child.id();
        tracing::info!(pid, remote = %connection.target(), "Viewer started");
        Ok(pid)
    }

    /// Starts the viewer; `false` means it could not be started and the
    /// reason has been logged.
    pub fn launch(&self, connection: &Connection) -> bool {
        match self.try_launch(connection) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(connection = %connection.name(), error = %e, "Failed to launch the viewer");
                false
            }
        }
    }

    /// Runs `<executable> --help`; available if either stream produced
    /// output, whatever the exit status.
    #[must_use]
    pub fn probe_availability(&self) -> bool {
        self.run_probe("--help")
            .is_some_and(|out| !out.stdout.is_empty() || !out.stderr.is_empty())
    }

    /// Runs `<executable> --version`; trimmed stdout on a successful exit
    #[must_use]
    pub fn probe_version(&self) -> Option<String> {
        let out = self.run_probe("--version")?;
        out.status.success().then(|| out.stdout.trim().to_string())
    }

    /// Combines path, availability and version
    #[must_use]
    pub fn status(&self) -> ViewerStatus {
        ViewerStatus {
            path: self.executable.clone(),
            available: self.probe_availability(),
            version: self.probe_version(),
        }
    }

    fn run_probe(&self, arg: &str) -> Option<ProbeOutput> {
        let _span = crate::trace_operation_debug!(
            span_names::VIEWER_PROBE,
            probe = arg,
            executable = %self.executable.display()
        )
        .entered();

        let mut child = match Command::new(&self.executable)
            .arg(arg)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(error = %e, "Viewer probe could not start");
                return None;
            }
        };

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let started = Instant::now();
        let deadline = started
            .checked_add(self.probe_timeout)
            .unwrap_or(started + MAX_VIEWER_TIMEOUT);
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    tracing::warn!(
                        timeout_ms = u64::try_from(self.probe_timeout.as_millis()).unwrap_or(u64::MAX),
                        "Viewer probe timed out"
                    );
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to poll viewer probe");
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
            }
        };

        let stdout = collect(&stdout, deadline);
        let stderr = collect(&stderr, deadline);
        tracing::debug!(
            %status,
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "Viewer probe finished"
        );

        Some(ProbeOutput {
            status,
            stdout,
            stderr,
        })
    }
}

struct ProbeOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

/// Reads a child pipe to the end on a helper thread
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    if let Some(mut pipe) = pipe {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            let _ = tx.send(buf);
        });
    }
    rx
}

/// Waits for a drained pipe until `deadline`, but at least [`DRAIN_GRACE`];
/// a grandchild still holding the pipe open yields whatever is missing as
/// empty.
fn collect(rx: &mpsc::Receiver<Vec<u8>>, deadline: Instant) -> String {
    let wait = deadline
        .saturating_duration_since(Instant::now())
        .max(DRAIN_GRACE);
    rx.recv_timeout(wait)
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}

/// Picks the viewer executable.
///
/// Order: `explicit_path`, then [`DEFAULT_VIEWER_PATH`] if it is an
/// executable file, then [`VIEWER_COMMAND`] looked up on `PATH` at spawn
/// time.
#[must_use]
pub fn resolve_executable(explicit_path: Option<PathBuf>) -> PathBuf {
    resolve_with_default(explicit_path, Path::new(DEFAULT_VIEWER_PATH))
}

fn resolve_with_default(explicit_path: Option<PathBuf>, well_known: &Path) -> PathBuf {
    if let Some(path) = explicit_path {
        tracing::debug!(path = %path.display(), "Using configured viewer");
        return path;
    }
    if is_executable(well_known) {
        return well_known.to_path_buf();
    }
    tracing::debug!(
        well_known = %well_known.display(),
        "Viewer not installed at the usual place, falling back to PATH"
    );
    PathBuf::from(VIEWER_COMMAND)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
