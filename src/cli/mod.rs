//! Command-line interface for online-confgen
//!
//! Provides `render` and `convert` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod convert;
mod render;

/// Render proxy/load-balancer configs from a deployment JSON and convert quiz CSV data
#[derive(Parser)]
#[command(name = "online-confgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render nginx.conf and/or haproxy.cfg from RUN_DIR/config/CONFIG_NAME.json
    Render(render::RenderArgs),

    /// Convert problems.csv into problems.json
    Convert(convert::ConvertArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Render(args) => render::run(args),
        Commands::Convert(args) => convert::run(args),
    }
}
