//! Integration tests for launching and probing a real viewer stand-in
//!
//! A shell script plays the part of `vncviewer` and records its arguments,
//! so these tests only run on Unix.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use vncdeck_core::config::ViewerSettings;
use vncdeck_core::launcher::ViewerLauncher;
use vncdeck_core::models::Connection;

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// A viewer that writes one argument per line to `args.txt`
fn recording_viewer(dir: &Path) -> (PathBuf, PathBuf) {
    let viewer = dir.join("vncviewer");
    let record = dir.join("args.txt");
    write_script(
        &viewer,
        &format!(
            "for arg in \"$@\"; do echo \"$arg\"; done > '{}.part'\nmv '{0}.part' '{0}'",
            record.display()
        ),
    );
    (viewer, record)
}

fn wait_for(path: &Path) -> String {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Ok(content) = std::fs::read_to_string(path) {
            return content;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("viewer never wrote {}", path.display());
}

#[test]
fn test_launch_passes_expected_arguments() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let dir = TempDir::new().unwrap();
    let (viewer, record) = recording_viewer(dir.path());
    let launcher = ViewerLauncher::new(Some(viewer));
    let conn = Connection::new("work", "h", 5900)
        .unwrap()
        .with_username(Some("bob".to_string()));

    assert!(launcher.launch(&conn));
    assert_eq!(wait_for(&record), "-User\nbob\nbob@h:5900\n");
}

#[test]
fn test_launch_does_not_wait_for_viewer() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let dir = TempDir::new().unwrap();
    let viewer = dir.path().join("vncviewer");
    write_script(&viewer, "exec sleep 3");
    let launcher = ViewerLauncher::new(Some(viewer));
    let conn = Connection::with_defaults("slow", "h").unwrap();

    let started = Instant::now();
    let pid = launcher.try_launch(&conn).unwrap();
    assert!(pid > 0);
    assert!(started.elapsed() < Duration::from_secs(2), "launch must not block");
}

#[test]
fn test_settings_drive_launcher() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let dir = TempDir::new().unwrap();
    let viewer = dir.path().join("vncviewer");
    write_script(&viewer, "exec sleep 5");
    let settings = ViewerSettings {
        path: Some(viewer.display().to_string()),
        probe_timeout_secs: 1,
    };

    let launcher = ViewerLauncher::from_settings(&settings, None);
    let started = Instant::now();
    assert!(!launcher.probe_availability());
    assert!(launcher.probe_version().is_none());
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_chatty_probe_does_not_deadlock() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let dir = TempDir::new().unwrap();
    let viewer = dir.path().join("vncviewer");
    // Well past a pipe buffer on both streams
    write_script(
        &viewer,
        "i=0\nwhile [ $i -lt 4000 ]; do\n  echo \"usage line $i padding padding padding\"\n  echo \"warning line $i\" >&2\n  i=$((i+1))\ndone\nexit 1",
    );
    let launcher = ViewerLauncher::new(Some(viewer)).with_probe_timeout(Duration::from_secs(10));

    assert!(launcher.probe_availability());
}
