//! Starting the program described by a [`LaunchPlan`].

use std::io;
use std::process::ExitStatus;

use crate::config::LaunchMode;
use crate::lifecycle::signals::{self, ForwardedSignals};
use crate::lifecycle::startup::LaunchPlan;

/// Failure to start or wait on the program.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to set up supervisor: {0}")]
    Runtime(#[source] io::Error),
}

/// Start the program according to `plan.mode`.
///
/// Exec mode never returns on success. Supervise mode returns the child's
/// exit code.
pub fn launch(plan: &LaunchPlan) -> Result<i32, LaunchError> {
    match plan.mode {
        LaunchMode::Exec => exec(plan),
        LaunchMode::Supervise => supervise_blocking(plan),
    }
}

#[cfg(unix)]
fn exec(plan: &LaunchPlan) -> Result<i32, LaunchError> {
    use std::os::unix::process::CommandExt;

    let source = std::process::Command::new(&plan.program)
        .args(&plan.args)
        .envs(plan.env.iter())
        .exec();

    Err(LaunchError::Exec {
        program: plan.program.clone(),
        source,
    })
}

#[cfg(not(unix))]
fn exec(plan: &LaunchPlan) -> Result<i32, LaunchError> {
    tracing::debug!("Exec-replace unavailable on this platform, supervising instead");
    supervise_blocking(plan)
}

fn supervise_blocking(plan: &LaunchPlan) -> Result<i32, LaunchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(LaunchError::Runtime)?;

    runtime.block_on(supervise(plan))
}

/// Spawn the program as a child, forward termination signals to it and
/// wait for it to exit.
pub async fn supervise(plan: &LaunchPlan) -> Result<i32, LaunchError> {
    let mut signals = ForwardedSignals::install().map_err(LaunchError::Runtime)?;

    let mut child = tokio::process::Command::new(&plan.program)
        .args(&plan.args)
        .envs(plan.env.iter())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: plan.program.clone(),
            source,
        })?;

    tracing::debug!(pid = ?child.id(), program = %plan.program, "Child started");

    loop {
        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(|source| LaunchError::Wait {
                    program: plan.program.clone(),
                    source,
                })?;
                let code = exit_code(status);
                tracing::info!(code, "{} exited", plan.program);
                return Ok(code);
            }
            Some(signal) = signals.recv() => {
                tracing::info!(?signal, "Forwarding signal to child");
                if let Err(e) = signals::forward(&mut child, signal) {
                    tracing::warn!("Failed to forward {:?}: {}", signal, e);
                }
            }
        }
    }
}

/// Map a child's status to the code the launcher exits with.
///
/// A child killed by a signal maps to `128 + signal`, as shells report it.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => signal_exit_code(status),
    }
}

#[cfg(unix)]
fn signal_exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(|sig| 128 + sig).unwrap_or(1)
}

#[cfg(not(unix))]
fn signal_exit_code(_status: ExitStatus) -> i32 {
    1
}
