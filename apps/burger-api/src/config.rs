//! Server configuration.
//!
//! Layered with the `config` crate, later layers winning:
//!
//! ```text
//! built-in defaults  ──►  burger.toml (optional)  ──►  BURGER_* environment
//! ```
//!
//! | Key               | Env var                  | Default                  |
//! |-------------------|--------------------------|--------------------------|
//! | `http_port`       | `BURGER_HTTP_PORT`       | `8080`                   |
//! | `bind_address`    | `BURGER_BIND_ADDRESS`    | `0.0.0.0`                |
//! | `database_path`   | `BURGER_DATABASE_PATH`   | `./data/goodburger.db`   |
//! | `strict_items`    | `BURGER_STRICT_ITEMS`    | `true`                   |
//! | `max_connections` | `BURGER_MAX_CONNECTIONS` | `5`                      |

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use burger_core::ResolutionMode;
use config::{Config, Environment, File, Source};
use serde::Deserialize;

/// Base name of the optional config file (`burger.toml`, `burger.json`, ...).
pub const CONFIG_FILE: &str = "burger";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BURGER";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Interface to bind
    pub bind_address: String,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Reject unknown item ids (`true`) or treat them as not selected (`false`)
    pub strict_items: bool,

    /// SQLite pool size
    pub max_connections: u32,
}

impl ApiConfig {
    /// Loads defaults, then `burger.toml` if present, then `BURGER_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    /// Builds the configuration from an explicit file layer and env layer.
    pub fn from_sources<F, E>(file: F, env: E) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        let config: ApiConfig = Config::builder()
            .set_default("http_port", 8080_i64)?
            .set_default("bind_address", "0.0.0.0")?
            .set_default("database_path", "./data/goodburger.db")?
            .set_default("strict_items", true)?
            .set_default("max_connections", 5_i64)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 {
            return Err(ConfigError::InvalidValue("http_port".to_string()));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("database_path".to_string()));
        }

        self.bind_ip()?;
        Ok(())
    }

    fn bind_ip(&self) -> Result<IpAddr, ConfigError> {
        self.bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidValue("bind_address".to_string()))
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.http_port))
    }

    /// How the pricing engine treats unknown item ids.
    pub fn resolution_mode(&self) -> ResolutionMode {
        if self.strict_items {
            ResolutionMode::Strict
        } else {
            ResolutionMode::Lenient
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(map))
    }

    fn no_file() -> impl Source + Send + Sync + 'static {
        File::from_str("", FileFormat::Toml)
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_sources(no_file(), env(&[])).unwrap();

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.max_connections, 5);
        assert!(config.strict_items);
        assert_eq!(config.resolution_mode(), ResolutionMode::Strict);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = File::from_str(
            "http_port = 9000\nstrict_items = false\ndatabase_path = \"/var/lib/burger.db\"",
            FileFormat::Toml,
        );
        let config =
            ApiConfig::from_sources(file, env(&[("BURGER_HTTP_PORT", "9100")])).unwrap();

        assert_eq!(config.http_port, 9100);
        assert_eq!(config.resolution_mode(), ResolutionMode::Lenient);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/burger.db"));
    }

    #[test]
    fn test_rejects_zero_port() {
        let err = ApiConfig::from_sources(no_file(), env(&[("BURGER_HTTP_PORT", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "http_port"));
    }

    #[test]
    fn test_rejects_zero_pool() {
        let err = ApiConfig::from_sources(no_file(), env(&[("BURGER_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "max_connections"));
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let err = ApiConfig::from_sources(no_file(), env(&[("BURGER_BIND_ADDRESS", "not-an-ip")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "bind_address"));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let err = ApiConfig::from_sources(no_file(), env(&[("BURGER_HTTP_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
