use super::{
    cors_config, database_config::DatabaseSettings, seed_config::SeedConfig,
    server_config::ServerConfig, store_config::StoreConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    /// `None` runs the service on in-memory stores
    pub database: Option<DatabaseSettings>,
    pub store: StoreConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store = StoreConfig::from_env()?;
        // Writes are not cancelled client-side, so the store timeout is
        // enforced by Postgres as the statement timeout.
        let database = DatabaseSettings::from_env()?.map(|mut settings| {
            settings.config = settings.config.with_statement_timeout(store.timeout);
            settings
        });

        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database,
            store,
            seed: SeedConfig::from_env(),
        })
    }
}
