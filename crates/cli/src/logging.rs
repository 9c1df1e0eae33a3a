//! Tracing subscriber setup shared by both binaries.

use crate::args::LogLevel;
use anyhow::{anyhow, Result};

/// Install the fmt subscriber. Logs go to stderr so stdout carries only
/// the menu and reports.
pub fn init_logging(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level.to_tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
