//! Tracing initialization for developer diagnostics.
//!
//! The run log is the user-facing record; `tracing` carries the structured
//! diagnostics and stays on stderr so the menu is not disturbed. `RUST_LOG`
//! opens it up, the default keeps it to warnings.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing`; safe to call more than once.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
