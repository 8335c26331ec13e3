//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Default level from config, `LAUNCHER_LOG` overrides it
//!
//! `RUST_LOG` is left alone: it belongs to the launched program and is
//! passed through to it untouched.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the launcher's own filter directives.
pub const LOG_ENV: &str = "LAUNCHER_LOG";

/// Filter applied when `LAUNCHER_LOG` is not set.
pub fn default_filter(level: &str) -> String {
    format!("order_tracker_launcher={}", level)
}

/// Filter from `directives` if present and valid, otherwise the default.
pub fn build_filter(directives: Option<&str>, level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter(level)))
}

/// Install the global subscriber. Subsequent calls are ignored.
pub fn init_logging(level: &str) {
    let directives = std::env::var(LOG_ENV).ok();

    let _ = tracing_subscriber::registry()
        .with(build_filter(directives.as_deref(), level))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
