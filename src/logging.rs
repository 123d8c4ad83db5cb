// src/logging.rs
// =============================================================================
// Diagnostic logging with `tracing`.
//
// Logs go to stderr so they never mix with the progress bar or the prompts
// on stdout. Only warnings show by default; set RUST_LOG to see more, e.g.
//
//   RUST_LOG=export_bookmarks=debug export-bookmarks -check-status
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
