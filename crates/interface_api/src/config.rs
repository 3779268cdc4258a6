//! API configuration
//!
//! Settings come from `CMS_`-prefixed environment variables. `PORT` and
//! `DATABASE_URL` are honored as fallbacks when the prefixed forms are unset.

use std::fmt;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// Which storage backend the service runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local maps; contents are lost on restart
    Memory,
    /// PostgreSQL through `infra_db`
    Postgres,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// API configuration
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Storage backend selected at startup
    pub storage_backend: StorageBackend,
    /// Database URL, required for the postgres backend
    pub database_url: Option<String>,
    /// Maximum pool size for the postgres backend
    pub db_max_connections: u32,
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            storage_backend: StorageBackend::Memory,
            database_url: None,
            db_max_connections: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Loads configuration from the given variables
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed, or if the postgres
    /// backend is selected without a database URL
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = vars
            .get("PORT")
            .cloned()
            .unwrap_or_else(|| defaults.port.to_string());

        let mut builder = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", port)?
            .set_default("storage_backend", "memory")?
            .set_default("db_max_connections", i64::from(defaults.db_max_connections))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?;

        if let Some(url) = vars.get("DATABASE_URL") {
            builder = builder.set_default("database_url", url.clone())?;
        }

        let config: Self = builder
            .add_source(Environment::with_prefix("CMS").source(Some(vars)))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_backend == StorageBackend::Postgres && self.database_url.is_none() {
            return Err(ConfigError::Message(
                "CMS_DATABASE_URL or DATABASE_URL must be set for the postgres backend"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// The database URL may carry credentials, so it is never printed.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("storage_backend", &self.storage_backend)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("db_max_connections", &self.db_max_connections)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_vars(vars(&[])).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_prefixed_values() {
        let config = ApiConfig::from_vars(vars(&[
            ("CMS_PORT", "9100"),
            ("CMS_STORAGE_BACKEND", "postgres"),
            ("CMS_DATABASE_URL", "postgres://db/claims"),
            ("CMS_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert_eq!(config.database_url.as_deref(), Some("postgres://db/claims"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_platform_fallbacks() {
        let config = ApiConfig::from_vars(vars(&[
            ("PORT", "5000"),
            ("DATABASE_URL", "postgres://fallback/claims"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url.as_deref(), Some("postgres://fallback/claims"));
    }

    #[test]
    fn test_prefixed_port_wins_over_fallback() {
        let config =
            ApiConfig::from_vars(vars(&[("PORT", "5000"), ("CMS_PORT", "7000")])).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_postgres_without_url_is_rejected() {
        let result = ApiConfig::from_vars(vars(&[("CMS_STORAGE_BACKEND", "postgres")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = ApiConfig {
            database_url: Some("postgres://user:secret@db/claims".to_string()),
            ..ApiConfig::default()
        };
        assert!(!format!("{config:?}").contains("secret"));
    }
}
