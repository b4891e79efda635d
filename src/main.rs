//! sysmon: one-shot hardware telemetry producer for a Waybar `custom` module.
//!
//! Configure the module with `"return-type": "json"` and an `interval`; each
//! tick runs this binary once and reads a single JSON line from stdout.
//!
//! Run with:  `RUST_LOG=debug sysmon`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries exactly one JSON payload.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("sysmon v{} starting", env!("CARGO_PKG_VERSION"));

    sysmon_waybar::run().map_err(Into::into)
}
