//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{finalize, read_config, ConfigError};
use crate::config::{LaunchMode, LauncherConfig};

#[derive(Parser, Debug, Default)]
#[command(name = "order-tracker-launcher")]
#[command(about = "Export add-on options and start the order tracker", long_about = None)]
pub struct Cli {
    /// Launcher config file (TOML)
    #[arg(short, long, env = "LAUNCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Options document to read
    #[arg(long, env = "LAUNCHER_OPTIONS_PATH")]
    pub options: Option<String>,

    /// Program to start
    #[arg(long, env = "LAUNCHER_PROGRAM")]
    pub program: Option<String>,

    /// Bind address passed to the program
    #[arg(long)]
    pub addr: Option<String>,

    /// Port passed to the program
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Spawn and wait instead of replacing this process
    #[arg(long)]
    pub supervise: bool,

    /// Log the launch plan without starting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log level when LAUNCHER_LOG is unset
    #[arg(long, env = "LAUNCHER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Defaults, then the config file, then flags; validated.
    pub fn resolve(&self) -> Result<LauncherConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => LauncherConfig::default(),
        };

        if let Some(options) = &self.options {
            config.options_path = options.clone();
        }
        if let Some(program) = &self.program {
            config.target.program = program.clone();
        }
        if let Some(addr) = &self.addr {
            config.target.addr = addr.clone();
        }
        if let Some(port) = self.port {
            config.target.port = port;
        }
        if self.supervise {
            config.launch.mode = LaunchMode::Supervise;
        }
        if self.dry_run {
            config.launch.dry_run = true;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        finalize(config)
    }
}
