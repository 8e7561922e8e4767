use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{
    dependency_injection::{DependencyContainer, Storage},
    seed::Seed,
    server::Server,
};

/// Inventory REST API entry point
///
/// Layout:
/// - config/: environment-driven configuration (server, CORS, database, store timeout)
/// - setup/: dependency wiring and the poem server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Select storage
    let storage = match &config.database {
        Some(settings) => Storage::Postgres(database_config::init_database(settings).await?),
        None => {
            let seed = match &config.seed.path {
                Some(path) => Seed::load(path)?,
                None => Seed::default(),
            };
            tracing::warn!(
                products = seed.products.len(),
                orders = seed.orders.len(),
                "DATABASE_URL not set, using in-memory stores"
            );
            Storage::InMemory(seed)
        }
    };

    // 5. Wire dependencies
    let container = DependencyContainer::new(storage, config.store.timeout);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
