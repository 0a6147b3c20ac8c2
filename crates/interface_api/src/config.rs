//! API configuration

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use infra_db::DatabaseConfig;

/// Which `CustomerPort` implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Explicit SQL through sqlx
    #[default]
    Sql,
    /// SeaORM entity mapping
    Orm,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sql => f.write_str("sql"),
            StorageBackend::Orm => f.write_str("orm"),
        }
    }
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum pool connections
    pub max_connections: u32,
    /// Connections the pool keeps open while idle
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u32,
    /// Log level
    pub log_level: String,
    /// Storage adapter selection
    pub storage_backend: StorageBackend,
    /// Register one random customer at startup
    pub seed_on_startup: bool,
    /// Apply pending migrations at startup
    pub run_migrations: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/customers".to_string(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout_secs: 30,
            log_level: "info".to_string(),
            storage_backend: StorageBackend::Sql,
            seed_on_startup: false,
            run_migrations: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset keys fall back to the values of [`ApiConfig::default`].
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("min_connections", i64::from(defaults.min_connections))?
            .set_default("connect_timeout_secs", i64::from(defaults.connect_timeout_secs))?
            .set_default("log_level", defaults.log_level)?
            .set_default("storage_backend", defaults.storage_backend.to_string())?
            .set_default("seed_on_startup", defaults.seed_on_startup)?
            .set_default("run_migrations", defaults.run_migrations)
    }

    /// Pool settings for the configured database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(u64::from(self.connect_timeout_secs)))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
