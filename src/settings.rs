use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings, read from the process environment (`DB_PATH`, `ADDRESS`,
/// `LOG_LEVEL`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub address: String,
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::load(Environment::default())
    }

    pub fn load(source: impl Source + Send + Sync + 'static) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("address", DEFAULT_ADDRESS)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
