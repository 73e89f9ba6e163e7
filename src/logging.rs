//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::EnvFilter;

/// Filter override, e.g. `PORTFOLIO_LOG=portfolio_site=debug`
pub const LOG_ENV: &str = "PORTFOLIO_LOG";

/// Pick the fallback level from CLI flags, then config.
pub fn resolve_level<'a>(quiet: bool, verbose: bool, configured: &'a str) -> &'a str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    }
}

/// Install the global fmt subscriber. Writes to stderr so stdout stays clean.
pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
