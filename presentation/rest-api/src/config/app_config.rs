use super::{cors_config, openfoodfacts_config::OpenFoodFactsConfig, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: OpenFoodFactsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: OpenFoodFactsConfig::from_env(),
        }
    }
}
