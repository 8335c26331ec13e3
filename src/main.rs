//! Order tracker launcher.
//!
//! Container entrypoint for the order tracker add-on.
//!
//! ```text
//!   /data/options.json ──▶ options ──▶ ExportedEnv ──┐
//!                                                    ▼
//!   CLI / launcher.toml ──▶ config ──────────▶ LaunchPlan ──▶ exec / supervise
//!                                                              order-tracker --addr 0.0.0.0 --port 8099
//! ```

use clap::Parser;

use order_tracker_launcher::cli::Cli;
use order_tracker_launcher::observability::init_logging;
use order_tracker_launcher::run;

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!("Invalid launcher configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability.log_level);

    match run(&config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
