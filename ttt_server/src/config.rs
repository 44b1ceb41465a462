//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::{net::SocketAddr, path::PathBuf};
use tictactoe::CoordinatorConfig;

const DEFAULT_BIND: &str = "127.0.0.1:3001";
const DEFAULT_STATIC_DIR: &str = "public";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Directory served for every path the API doesn't claim
    pub static_dir: PathBuf,
    /// Prometheus exporter address; no exporter when unset
    pub metrics_bind: Option<SocketAddr>,
    /// Coordinator tuning
    pub coordinator: CoordinatorConfig,
    /// WebSocket messages accepted per connection per second
    pub ws_burst_limit: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `static_dir_override` - Optional static directory override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if an address variable is set but malformed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        static_dir_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_addr("SERVER_BIND")?.unwrap_or(SocketAddr::from(([127, 0, 0, 1], 3001))),
        };

        let static_dir = static_dir_override
            .or_else(|| std::env::var("STATIC_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let metrics_bind = parse_addr("METRICS_BIND")?;

        let defaults = CoordinatorConfig::default();
        let coordinator = CoordinatorConfig {
            session_linger_ms: parse_env_or("SESSION_LINGER_MS", defaults.session_linger_ms),
            leaderboard_size: parse_env_or("LEADERBOARD_SIZE", defaults.leaderboard_size),
            inbox_capacity: parse_env_or("COORDINATOR_INBOX_CAPACITY", defaults.inbox_capacity),
            max_chat_length: parse_env_or("MAX_CHAT_LENGTH", defaults.max_chat_length),
            max_name_length: parse_env_or("MAX_NAME_LENGTH", defaults.max_name_length),
        };

        Ok(ServerConfig {
            bind,
            static_dir,
            metrics_bind,
            coordinator,
            ws_burst_limit: parse_env_or("WS_BURST_LIMIT", 10),
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ws_burst_limit == 0 {
            return Err(ConfigError::Invalid {
                var: "WS_BURST_LIMIT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server address ({})", self.bind),
            });
        }

        self.coordinator
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                var: "coordinator".to_string(),
                reason,
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3001)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            metrics_bind: None,
            coordinator: CoordinatorConfig::default(),
            ws_burst_limit: 10,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse an optional socket address; a set but malformed value is an error
fn parse_addr(key: &str) -> Result<Option<SocketAddr>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.parse().map(Some).map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("'{}' is not an IP:PORT address (e.g. {})", value, DEFAULT_BIND),
        }),
        Err(_) => Ok(None),
    }
}
