//! ClassHub Server: course and classroom catalog API
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use classhub_api::{AppState, run_server};
use classhub_core::config::{AppConfig, ENV_VAR, Environment, StoreProvider};
use classhub_core::error::AppError;
use classhub_database::{DatabasePool, MemoryStore, Stores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = Environment::from_env();

    let config = AppConfig::load(&env.name).context("Failed to load configuration")?;

    init_logging(&config);

    if env.is_development() {
        tracing::warn!(
            defaulted = env.defaulted,
            "Development configuration in effect; set {ENV_VAR} for production, the checked-in token secret is not safe to use there"
        );
    }

    run(config, &env.name).await.map_err(|e| {
        tracing::error!(error = %e, "Server error");
        anyhow::Error::new(e)
    })
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig, env: &str) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %env,
        "Starting ClassHub"
    );

    let (stores, db_pool) = match config.database.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            (pool.stores(), Some(pool))
        }
        StoreProvider::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on exit");
            (Stores::memory(Arc::new(MemoryStore::new())), None)
        }
    };

    let state = AppState::new(config, stores, db_pool)?;
    run_server(state).await
}
