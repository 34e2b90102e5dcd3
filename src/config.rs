//! Configuration management for the BookStore server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Reject books whose `author_id` does not resolve to a stored author
    #[serde(default)]
    pub enforce_author_reference: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Verbose server mode
    #[serde(default)]
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKSTORE_SERVER__PORT=8080, BOOKSTORE_CATALOG__ENFORCE_AUTHOR_REFERENCE=true, ...
            .add_source(
                Environment::with_prefix("BOOKSTORE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "debug",
                env::var("BOOKSTORE_DEBUG").ok().map(|v| parse_debug_flag(&v)),
            )?
            .build()?;

        config.try_deserialize()
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn log_directive(&self) -> String {
        let level = if self.debug { "debug" } else { self.logging.level.as_str() };
        format!("bookstore_api={level},tower_http={level}")
    }
}

/// `true`, `1` and `t` (any case) switch debug mode on; anything else leaves it off.
pub fn parse_debug_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "t")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
