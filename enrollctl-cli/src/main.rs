//! enrollctl CLI - student, course and enrollment records over HTTP
//!
//! Subcommands:
//! - `serve`: create the schema if needed and run the HTTP API
//! - `migrate`: create the schema and exit
//!
//! Settings come from flags, then environment variables, then a `.env` file
//! in the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "enrollctl",
    author,
    version,
    about = "Record-management API for students, courses and enrollments"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if they do not exist
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; flags and real env vars still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await?,
    }

    Ok(())
}
