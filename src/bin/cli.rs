use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_catalog::db::transfer::{export_data, import_data};
use trivia_catalog::db::{establish_connection, run_migrations};
use trivia_catalog::settings::DEFAULT_LOG_LEVEL;
use trivia_catalog::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    /// Log filter directive
    #[clap(long, env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the catalog with categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Write the catalog to categories.csv and questions.csv in a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let db_path = cli.db_path.display().to_string();
    let pool = establish_connection(&db_path)
        .await
        .context("Cannot connect to DB")?;
    run_migrations(&pool).await?;
    match cli.command {
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export")?,
        Commands::Import { path } => import_data(&pool, &path).await.context("Cannot import")?,
    }
    Ok(())
}
