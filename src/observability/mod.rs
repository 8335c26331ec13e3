//! Observability subsystem.
//!
//! The launcher is short-lived, so this is only structured logging to
//! stdout. The supervisor captures it alongside the program's own output.

pub mod logging;

pub use logging::init_logging;
