//! OS signal handling for supervised mode.
//!
//! # Responsibilities
//! - Register handlers for SIGTERM, SIGINT and SIGHUP (Ctrl-C elsewhere)
//! - Deliver the same signal to the supervised child
//!
//! Once a handler is registered the launcher no longer dies from the
//! signal itself; it keeps waiting and exits with the child's status.

use std::io;

use tokio::process::Child;

/// A signal the launcher passes through to its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forwarded {
    Terminate,
    Interrupt,
    Hangup,
}

#[cfg(unix)]
mod imp {
    use std::io;

    use nix::sys::signal::{kill, Signal as NixSignal};
    use nix::unistd::Pid;
    use tokio::process::Child;
    use tokio::signal::unix::{signal, Signal, SignalKind};

    use super::Forwarded;

    pub struct ForwardedSignals {
        terminate: Signal,
        interrupt: Signal,
        hangup: Signal,
    }

    impl ForwardedSignals {
        pub fn install() -> io::Result<Self> {
            Ok(Self {
                terminate: signal(SignalKind::terminate())?,
                interrupt: signal(SignalKind::interrupt())?,
                hangup: signal(SignalKind::hangup())?,
            })
        }

        pub async fn recv(&mut self) -> Option<Forwarded> {
            tokio::select! {
                Some(()) = self.terminate.recv() => Some(Forwarded::Terminate),
                Some(()) = self.interrupt.recv() => Some(Forwarded::Interrupt),
                Some(()) = self.hangup.recv() => Some(Forwarded::Hangup),
                else => None,
            }
        }
    }

    pub fn forward(child: &mut Child, signal: Forwarded) -> io::Result<()> {
        // Already reaped.
        let Some(pid) = child.id() else {
            return Ok(());
        };
        let signal = match signal {
            Forwarded::Terminate => NixSignal::SIGTERM,
            Forwarded::Interrupt => NixSignal::SIGINT,
            Forwarded::Hangup => NixSignal::SIGHUP,
        };
        kill(Pid::from_raw(pid as i32), signal).map_err(io::Error::from)
    }
}

#[cfg(not(unix))]
mod imp {
    use std::io;

    use tokio::process::Child;

    use super::Forwarded;

    pub struct ForwardedSignals;

    impl ForwardedSignals {
        pub fn install() -> io::Result<Self> {
            Ok(Self)
        }

        pub async fn recv(&mut self) -> Option<Forwarded> {
            tokio::signal::ctrl_c().await.ok().map(|()| Forwarded::Interrupt)
        }
    }

    /// No signal delivery off Unix; the child is terminated instead.
    pub fn forward(child: &mut Child, _signal: Forwarded) -> io::Result<()> {
        child.start_kill()
    }
}

/// Signals received by the launcher that should reach the child.
pub struct ForwardedSignals(imp::ForwardedSignals);

impl ForwardedSignals {
    pub fn install() -> io::Result<Self> {
        imp::ForwardedSignals::install().map(Self)
    }

    /// Wait for the next signal. `None` if every stream closed.
    pub async fn recv(&mut self) -> Option<Forwarded> {
        self.0.recv().await
    }
}

/// Deliver `signal` to `child`. A child that has already exited is ignored.
pub fn forward(child: &mut Child, signal: Forwarded) -> io::Result<()> {
    imp::forward(child, signal)
}
