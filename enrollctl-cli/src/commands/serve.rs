//! HTTP server command
//!
//! Creates the schema if needed, then serves the students, courses and
//! enrollments API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use enrollctl_server::db::{create_pool_with_options, migrations, PgStore};
use enrollctl_server::http::{run_server, AppState, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Address to bind to
    #[arg(long, short = 'b', env = "ENROLLCTL_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting enrollctl server on {}", args.bind);

    let pool = create_pool_with_options(&args.db.database_url, args.db.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(AppState::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
