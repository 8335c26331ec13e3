//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file)
//!     → CLI / environment overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → LauncherConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the launcher runs with no config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LauncherConfig;
pub use schema::LaunchConfig;
pub use schema::LaunchMode;
pub use schema::TargetConfig;
