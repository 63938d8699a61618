//! Database Config

use clap::Args;

/// Product store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string. Products are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
