//! recipebox CLI - runs the recipe HTTP API
//!
//! Configuration comes from flags, the environment, or a `.env` file in the
//! working directory (loaded first, never overriding real variables).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "recipebox",
    author,
    version,
    about = "CRUD HTTP API for recipes, backed by Postgres"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply the schema and serve the API until Ctrl+C / SIGTERM
    Run(commands::run::RunArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the environment may already be complete
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Run(args) => commands::run_run(args).await?,
    }

    Ok(())
}
