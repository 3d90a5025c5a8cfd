pub mod migrate;
pub mod serve;

use clap::Args;

/// Database connection settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum connections in the pool
    #[arg(
        long,
        env = "ENROLLCTL_MAX_CONNECTIONS",
        default_value_t = enrollctl_server::db::pool::DEFAULT_MAX_CONNECTIONS
    )]
    pub max_connections: u32,
}
