// Only compile the viewer when the TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_site::logging::{init_tracing, resolve_level};
use portfolio_site::{current_year, export_site, ContentRegistry, SiteConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "portfolio-site", version, about = "Render or browse the portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the static page to disk
    Render {
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Browse the page in the terminal (default)
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load().context("failed to load configuration")?;
    init_tracing(resolve_level(cli.quiet, cli.verbose, &config.log_level))?;
    debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Command::View) {
        Command::Render { out } => run_render(out.unwrap_or(config.output_dir)),
        Command::View => run_view(),
    }
}

fn run_render(out_dir: PathBuf) -> Result<()> {
    let path = export_site(ContentRegistry::global(), current_year(), &out_dir)
        .context("failed to export site")?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_view() -> Result<()> {
    let mut app = ui::App::new(ContentRegistry::global(), current_year());
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_view() -> Result<()> {
    anyhow::bail!(
        "terminal viewer not available; rebuild with `--features tui` or run `portfolio-site render`"
    )
}
