// Portfolio Site - Web Server
// Serves the rendered page plus a small JSON API

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_site::logging::{init_tracing, resolve_level};
use portfolio_site::server::{router, AppState};
use portfolio_site::{ContentRegistry, SiteConfig};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "portfolio-server", version, about = "Serve the portfolio page over HTTP")]
struct Cli {
    /// Interface to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SiteConfig::load().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    init_tracing(resolve_level(false, cli.verbose, &config.log_level))?;

    let app = router(AppState::new(ContentRegistry::global().clone()));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, "server running");
    println!("🚀 Server running on http://{addr}");
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
