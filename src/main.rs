//! KidNest Server — family account and kid profile backend.
//!
//! Entry point that loads configuration, connects to the database, runs
//! migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use kidnest_core::config::AppConfig;
use kidnest_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("KIDNEST_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging per configuration.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting KidNest v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = kidnest_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    kidnest_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    kidnest_api::app::run_server(config, db_pool).await
}
