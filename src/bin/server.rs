use anyhow::Context;
use clap::Parser;
use trivia_catalog::db::{establish_connection, run_migrations};
use trivia_catalog::server::app::run_server;
use trivia_catalog::settings::Settings;
use trivia_catalog::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on, overrides ADDRESS
    #[clap(long)]
    address: Option<String>,
    /// Skip applying database migrations on startup
    #[clap(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env().context("Failed to load settings, is DB_PATH set?")?;
    init_tracing(&settings.log_level);
    let pool = establish_connection(&settings.db_path)
        .await
        .with_context(|| format!("Cannot open database at {}", settings.db_path))?;

    if !cli.no_migrate {
        tracing::info!("Running db migrations...");
        run_migrations(&pool).await?;
    }

    let address = cli.address.unwrap_or(settings.address);
    run_server(pool, &address).await
}
