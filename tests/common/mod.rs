//! Shared utilities for integration tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use order_tracker_launcher::config::{LaunchMode, LauncherConfig};
use tempfile::TempDir;

/// Write `content` to `name` inside `dir`.
pub fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write an executable shell script.
#[cfg(unix)]
#[allow(dead_code)]
pub fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write(dir, name, &format!("#!/bin/sh\n{}\n", body));
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Launcher config pointing at `options_path` and `program`, supervised.
#[allow(dead_code)]
pub fn config_for(options_path: &Path, program: &Path) -> LauncherConfig {
    let mut config = LauncherConfig::default();
    config.options_path = options_path.display().to_string();
    config.target.program = program.display().to_string();
    config.launch.mode = LaunchMode::Supervise;
    config
}

#[derive(Clone, Default)]
#[allow(dead_code)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a scoped subscriber and return its result plus the log text.
#[allow(dead_code)]
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (result, logs)
}

/// Log lines mentioning `needle`.
#[allow(dead_code)]
pub fn lines_with<'a>(logs: &'a str, needle: &str) -> Vec<&'a str> {
    logs.lines().filter(|line| line.contains(needle)).collect()
}
