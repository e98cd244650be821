//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use rollcall_server::db::migrations;
use rollcall_server::{create_pool, DEFAULT_DATABASE_URL};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (SQLite; the file is created if missing)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Create missing tables, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    migrations::run(&pool).await.context("Migration failed")?;
    pool.close().await;

    tracing::info!(database = %args.database_url, "Database is up to date");
    Ok(())
}
