//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read options → Project whitelist → Log exported keys → LaunchPlan
//!
//! Launch (launch.rs):
//!     Exec mode:      replace process image with the program
//!     Supervise mode: spawn → wait → propagate exit code
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT/SIGHUP → forwarded to the supervised child
//! ```
//!
//! # Design Decisions
//! - Fail fast: unreadable or malformed options abort before launch
//! - A missing options file is not fatal
//! - The launcher's own environment is never modified

pub mod launch;
pub mod signals;
pub mod startup;

pub use launch::{launch, LaunchError};
pub use startup::{prepare, LaunchPlan};

use crate::config::LauncherConfig;
use crate::error::LauncherError;

/// Run the whole bootstrap sequence and return the process exit code.
///
/// In exec mode this only returns on failure.
pub fn run(config: &LauncherConfig) -> Result<i32, LauncherError> {
    let plan = prepare(config)?;

    if config.launch.dry_run {
        tracing::info!(
            program = %plan.program,
            args = ?plan.args,
            exported = ?plan.env.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            "Dry run, not starting program"
        );
        return Ok(0);
    }

    Ok(launch(&plan)?)
}
