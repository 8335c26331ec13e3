//! Crate-level error type.

use crate::config::loader::ConfigError;
use crate::lifecycle::LaunchError;
use crate::options::OptionsError;

/// Any failure that stops the launcher before the program takes over.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl LauncherError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
