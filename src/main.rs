use anyhow::{Context, Result};
use clap::Parser;
use roster::config::ensure_database_directory;
use roster::http::{self, AppState};
use roster::{Config, Database, telemetry};

#[tokio::main]
async fn main() {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    let config = Config::parse();

    if let Err(e) = run(config).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    telemetry::init_tracing(config.debug)?;

    let db_path = config.database_path()?;
    ensure_database_directory(&db_path)?;
    tracing::info!("Opening database at {}", db_path.display());
    let db = Database::new(db_path);

    // Initialization failures are reported, not fatal: later requests
    // surface the store error (or fall back) on their own.
    match db.initialize() {
        Ok(report) => tracing::info!(
            students_seeded = report.students_seeded,
            notes_seeded = report.notes_seeded,
            "Database ready"
        ),
        Err(e) => tracing::error!(error = %e, "Database initialization failed"),
    }

    let fallback = config.fallback_enabled();
    if !fallback {
        tracing::info!("Fallback data disabled");
    }

    let state = AppState::new(db, fallback);
    http::serve(config.bind_addr(), state)
        .await
        .with_context(|| format!("Failed to serve on {}", config.bind_addr()))
}
