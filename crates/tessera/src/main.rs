//! Tessera command-line interface.
//!
//! Output documents go to stdout as JSON; logs go to stderr. Built with the
//! `metrics` feature, the default stdout metrics exporter shares stdout with
//! the JSON, so set `OTEL_EXPORTER=otlp` when output is parsed.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tessera_core::observability::{
    ObservabilityConfig, init_observability, shutdown_observability,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    init_observability(&ObservabilityConfig::from_env("tessera"))?;

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Normalize { names } => cli::handle_normalize(&names),
        Commands::Map { platform, payload } => cli::handle_map(&platform, &payload),
        Commands::Fetch(args) => cli::handle_fetch(args).await,
        Commands::Platforms => cli::handle_platforms(),
    };

    shutdown_observability();
    result
}
