//! Configuration schema definitions.
//!
//! This module defines the launcher's own settings. All types derive Serde
//! traits so the whole tree can be read from an optional TOML file.

use serde::{Deserialize, Serialize};

/// Default location of the options document written by the supervisor.
pub const DEFAULT_OPTIONS_PATH: &str = "/data/options.json";

/// Default program started once the environment is prepared.
pub const DEFAULT_PROGRAM: &str = "/usr/local/bin/order-tracker";

/// Default bind address passed to the program.
pub const DEFAULT_ADDR: &str = "0.0.0.0";

/// Default port passed to the program.
pub const DEFAULT_PORT: u16 = 8099;

/// Root configuration for the launcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Path of the JSON options document.
    pub options_path: String,

    /// Program and listener arguments.
    pub target: TargetConfig,

    /// How the program is started.
    pub launch: LaunchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            options_path: DEFAULT_OPTIONS_PATH.to_string(),
            target: TargetConfig::default(),
            launch: LaunchConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// The downstream program and the fixed flags it receives.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Absolute path (or PATH-resolved name) of the program.
    pub program: String,

    /// Value for `--addr`.
    pub addr: String,

    /// Value for `--port`.
    pub port: u16,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl TargetConfig {
    /// Command-line arguments handed to the program.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--addr".to_string(),
            self.addr.clone(),
            "--port".to_string(),
            self.port.to_string(),
        ]
    }
}

/// Process start strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Replace the launcher's process image.
    Exec,
    /// Spawn a child, forward signals, wait and propagate its exit code.
    Supervise,
}

impl Default for LaunchMode {
    fn default() -> Self {
        if cfg!(unix) {
            LaunchMode::Exec
        } else {
            LaunchMode::Supervise
        }
    }
}

/// Launch configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub mode: LaunchMode,

    /// Resolve everything and log the plan, but start nothing.
    pub dry_run: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `LAUNCHER_LOG` wins if set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
