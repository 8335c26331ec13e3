//! Startup orchestration.
//!
//! # Responsibilities
//! - Read the options document (missing file → warning, nothing exported)
//! - Project the whitelisted keys into the child environment
//! - Log one line per exported key, never the value
//! - Announce startup and hand a [`LaunchPlan`] to the launch step

use std::path::Path;

use crate::config::{LaunchMode, LauncherConfig};
use crate::options::{project, read_options, ExportedEnv, OptionsError};

/// Everything needed to start the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    pub env: ExportedEnv,
    pub mode: LaunchMode,
}

/// Build the launch plan from the options file named in `config`.
pub fn prepare(config: &LauncherConfig) -> Result<LaunchPlan, OptionsError> {
    let env = load_exported_env(Path::new(&config.options_path))?;

    tracing::info!(
        addr = %config.target.addr,
        "Starting order tracker on port {}",
        config.target.port
    );

    Ok(LaunchPlan {
        program: config.target.program.clone(),
        args: config.target.args(),
        env,
        mode: config.launch.mode,
    })
}

fn load_exported_env(path: &Path) -> Result<ExportedEnv, OptionsError> {
    let Some(document) = read_options(path)? else {
        tracing::warn!("Options file {} not found, no options exported", path.display());
        return Ok(ExportedEnv::new());
    };

    let projection = project(&document);

    for key in &projection.rejected {
        tracing::warn!("Ignoring {}: value must be a string, number or boolean", key);
    }
    for key in projection.env.keys() {
        tracing::info!("{} set from options", key);
    }

    Ok(projection.env)
}
