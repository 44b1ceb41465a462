//! Coordinator configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Coordinator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// How long a finished session stays around before removal (ms)
    pub session_linger_ms: u64,

    /// Number of entries in lobby leaderboard snapshots
    pub leaderboard_size: usize,

    /// Capacity of the actor inbox
    pub inbox_capacity: usize,

    /// Chat messages longer than this are truncated (characters)
    pub max_chat_length: usize,

    /// Longest accepted display name (characters)
    pub max_name_length: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            session_linger_ms: 1000,
            leaderboard_size: 10,
            inbox_capacity: 256,
            max_chat_length: 500,
            max_name_length: 32,
        }
    }
}

impl CoordinatorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.leaderboard_size == 0 {
            return Err("Leaderboard size must be at least 1".to_string());
        }

        if self.inbox_capacity == 0 {
            return Err("Inbox capacity must be at least 1".to_string());
        }

        if self.max_chat_length == 0 {
            return Err("Max chat length must be at least 1".to_string());
        }

        if self.max_name_length == 0 {
            return Err("Max name length must be at least 1".to_string());
        }

        if self.session_linger_ms > 60_000 {
            return Err("Session linger must be at most 60 seconds".to_string());
        }

        Ok(())
    }

    pub fn session_linger(&self) -> Duration {
        Duration::from_millis(self.session_linger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CoordinatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session_linger(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_leaderboard_rejected() {
        let config = CoordinatorConfig {
            leaderboard_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_long_linger_rejected() {
        let config = CoordinatorConfig {
            session_linger_ms: 120_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
