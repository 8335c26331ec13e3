//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port non-zero, address is an IP, known log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LauncherConfig → Result<(), Vec<ValidationError>>
//! - Runs before any file is read or process started

use std::net::IpAddr;

use tracing::level_filters::LevelFilter;

use crate::config::schema::LauncherConfig;

/// A single semantic problem in the launcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("options_path must not be empty")]
    EmptyOptionsPath,

    #[error("target.program must not be empty")]
    EmptyProgram,

    #[error("target.addr {0:?} is not an IP address")]
    InvalidAddr(String),

    #[error("target.port must be non-zero")]
    ZeroPort,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error, off")]
    InvalidLogLevel(String),
}

/// Check a configuration, collecting every error found.
pub fn validate_config(config: &LauncherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.options_path.trim().is_empty() {
        errors.push(ValidationError::EmptyOptionsPath);
    }
    if config.target.program.trim().is_empty() {
        errors.push(ValidationError::EmptyProgram);
    }
    if config.target.addr.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidAddr(config.target.addr.clone()));
    }
    if config.target.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
