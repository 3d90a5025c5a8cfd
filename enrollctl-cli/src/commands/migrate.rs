//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use enrollctl_server::db::{create_pool_with_options, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the students, courses and enrollments tables if missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(&args.db.database_url, args.db.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    pool.close().await;
    println!("Schema is up to date");
    Ok(())
}
