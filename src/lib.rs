//! Order tracker launcher library.
//!
//! Reads the add-on options document, exports the whitelisted keys to the
//! order tracker's environment and starts it.

pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod options;

pub use config::schema::LauncherConfig;
pub use error::LauncherError;
pub use lifecycle::{prepare, run, LaunchPlan};
pub use options::{ExportedEnv, OptionKey};
