use std::env;
use std::time::Duration;

use openfoodfacts::client::{DEFAULT_INDIA_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_WORLD_BASE_URL};

/// Open Food Facts catalog settings
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    pub world_base_url: String,
    pub india_base_url: String,
    pub timeout: Duration,
}

impl OpenFoodFactsConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - OFF_WORLD_BASE_URL: world database (default: "https://world.openfoodfacts.org")
    /// - OFF_INDIA_BASE_URL: India database (default: "https://in.openfoodfacts.org")
    /// - OFF_TIMEOUT_SECS: per-request timeout in seconds (default: 5)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("OFF_WORLD_BASE_URL").ok(),
            env::var("OFF_INDIA_BASE_URL").ok(),
            env::var("OFF_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(
        world_base_url: Option<String>,
        india_base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        let timeout = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            world_base_url: world_base_url.unwrap_or_else(|| DEFAULT_WORLD_BASE_URL.to_string()),
            india_base_url: india_base_url.unwrap_or_else(|| DEFAULT_INDIA_BASE_URL.to_string()),
            timeout,
        }
    }
}
