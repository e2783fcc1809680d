//! # Configuration
//!
//! Typed application configuration layered from an optional file and
//! `APP__`-prefixed environment variables.
//!
//! Example: `APP__SERVER__PORT=8080` overrides `server.port`.

use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Search pipeline settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// Deadline for the spatial store query, in milliseconds.
    pub store_timeout_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            store_timeout_ms: 5000,
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Path to a JSON seed file; absent starts the server empty.
    #[serde(default)]
    pub seed_path: Option<String>,
}

/// Full application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Search pipeline settings.
    #[serde(default)]
    pub search: SearchSettings,
    /// Data source settings.
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Loads the configuration from `config/default.toml` (optional) and
    /// the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`config::ConfigError`] when a source is present but
    /// malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
