use std::env;

/// Fixture loaded into the in-memory stores when no database is configured
///
/// Environment variables:
/// - INVENTORY_SEED_PATH: JSON file with `products` and `orders` (optional)
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    pub path: Option<String>,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self {
            path: env::var("INVENTORY_SEED_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        }
    }
}
