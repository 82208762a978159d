use super::{
    cors_config, order_api_config::OrderApiConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub order_api: OrderApiConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env()?,
            order_api: OrderApiConfig::from_env()?,
        })
    }
}
