//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    AUTH_COOKIE_NAME, DEFAULT_QR_SERVICE_URL, DEFAULT_QR_SIZE, DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
    DEFAULT_SESSION_TTL_SECS, MAX_IMAGE_BYTES,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub upload: UploadSettings,
    pub log: LogSettings,
    pub qr: QrSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Origin used to build shareable menu links, e.g. `https://menus.example.com`.
    pub public_base_url: String,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl AppSettings {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub auto_migrate: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub cookie_name: String,
    pub session_ttl_secs: i64,
    pub session_sweep_interval_secs: u64,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub max_image_bytes: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QrSettings {
    pub image_service_url: String,
    pub size: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::with_defaults(Config::builder())?
            .set_override("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Configuration built from defaults only, backed by the memory store.
    pub fn for_tests() -> Result<Self, ConfigError> {
        Self::with_defaults(Config::builder())?
            .set_override("app.env", "test")?
            .set_override("database.backend", "memory")?
            .set_override("auth.argon2_memory_kib", 1024)?
            .set_override("auth.argon2_iterations", 1)?
            .build()?
            .try_deserialize()
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "qrmenu-server")?
            .set_default("app.public_base_url", "http://localhost:8080")?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", "postgres://localhost/qrmenu")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("database.auto_migrate", true)?
            .set_default("auth.cookie_name", AUTH_COOKIE_NAME)?
            .set_default("auth.session_ttl_secs", DEFAULT_SESSION_TTL_SECS)?
            .set_default(
                "auth.session_sweep_interval_secs",
                DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
            )?
            .set_default("auth.argon2_memory_kib", 19 * 1024)?
            .set_default("auth.argon2_iterations", 2)?
            .set_default("auth.argon2_parallelism", 1)?
            .set_default("upload.max_image_bytes", MAX_IMAGE_BYTES as u64)?
            .set_default("log.format", "json")?
            .set_default("qr.image_service_url", DEFAULT_QR_SERVICE_URL)?
            .set_default("qr.size", DEFAULT_QR_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config = AppConfig::for_tests().unwrap();
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.auth.cookie_name, "auth_token");
        assert_eq!(config.auth.session_ttl_secs, 86_400);
        assert_eq!(config.upload.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.log.format, LogFormat::Json);
        assert!(config.log.directory.is_none());
        assert!(!config.app.is_production());
    }
}
