//! Prints summaries for the built-in workout packages.
//!
//! Run with:
//! ```
//! cargo run -p workout-report --bin report
//! ```

use tracing_subscriber::EnvFilter;
use workout_report::{config::ReportConfig, runner::write_report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ReportConfig::default();
    tracing::debug!(config = %serde_json::to_string(&config)?, "Loaded report configuration");

    let stdout = std::io::stdout();
    write_report(&config, &mut stdout.lock())?;

    Ok(())
}
