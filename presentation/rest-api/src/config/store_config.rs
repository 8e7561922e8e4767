use std::env;
use std::time::Duration;

use anyhow::Context;
use business::application::shared::timeout::DEFAULT_STORE_TIMEOUT;

/// Upper bound for every store call made by a use case
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub timeout: Duration,
}

impl StoreConfig {
    /// Environment variables:
    /// - STORE_TIMEOUT_MS: milliseconds (default: 5000)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_value(env::var("STORE_TIMEOUT_MS").ok().as_deref())
    }

    fn from_value(raw: Option<&str>) -> anyhow::Result<Self> {
        let timeout = match raw {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| format!("STORE_TIMEOUT_MS must be milliseconds, got '{}'", ms))?,
            ),
            None => DEFAULT_STORE_TIMEOUT,
        };
        Ok(Self { timeout })
    }
}
