use std::env;
use std::path::PathBuf;

use chrono::Duration;
use coffeedash_core::config::LayeredConfig;
use coffeedash_core::Result;

use crate::state::DEFAULT_SESSION_TTL_SECS;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// Optional TOML file with dashboard settings
    pub config_file: Option<PathBuf>,
    /// Seconds a session may stay idle before it is dropped
    pub session_ttl_secs: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            cors_origin: "http://localhost:3000".to_string(),
            config_file: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("COFFEEDASH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origin = env::var("COFFEEDASH_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        let config_file = env::var("COFFEEDASH_CONFIG").ok().map(PathBuf::from);

        let session_ttl_secs = env::var("COFFEEDASH_SESSION_TTL")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs: &i64| *secs > 0)
            .unwrap_or(defaults.session_ttl_secs);

        Self { port, cors_origin, config_file, session_ttl_secs }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs)
    }

    /// Dashboard settings: defaults, then the optional file, then environment
    pub fn dashboard_config(&self) -> Result<LayeredConfig> {
        let config = LayeredConfig::with_defaults();
        let config = match &self.config_file {
            Some(path) => config.load_from_file(path)?,
            None => config,
        };
        Ok(config.load_from_env())
    }
}
