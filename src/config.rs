//! Configuration management for NebulaAI core.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{CoreError, Result};

/// Default number of retries for outbound calls.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default timeout for outbound calls, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// Default rate limit capacity.
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: usize = 100;
/// Default rate limit window (one minute), in milliseconds.
pub const DEFAULT_RATE_LIMIT_WINDOW_MS: u64 = 60_000;

/// Main configuration shared by NebulaAI consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Number of retries for outbound calls
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Timeout for outbound calls in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            default_timeout_ms: default_timeout_ms(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests admitted per window
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Sliding window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
        }
    }
}

fn default_max_requests() -> usize {
    DEFAULT_RATE_LIMIT_MAX_REQUESTS
}

fn default_window_ms() -> u64 {
    DEFAULT_RATE_LIMIT_WINDOW_MS
}

impl RateLimitConfig {
    /// The window as a `Duration`.
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl CoreConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading core configuration");

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CoreError::Config(format!("Failed to parse core config: {}", e)))
    }

    /// The default timeout as a `Duration`.
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::default();

        assert_eq!(config.max_retries, 3);
        assert_eq!(config.default_timeout(), Duration::from_secs(5));
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.rate_limit.window(), Duration::from_secs(60));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
max_retries: 5
default_timeout_ms: 2500
rate_limit:
  max_requests: 10
  window_ms: 1000
"#;

        let config = CoreConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.default_timeout_ms, 2500);
        assert_eq!(
            config.rate_limit,
            RateLimitConfig {
                max_requests: 10,
                window_ms: 1000,
            }
        );
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let yaml = r#"
rate_limit:
  max_requests: 7
"#;

        let config = CoreConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.default_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.rate_limit.max_requests, 7);
        assert_eq!(config.rate_limit.window_ms, DEFAULT_RATE_LIMIT_WINDOW_MS);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = CoreConfig::from_yaml("max_retries: [not, a, number]");

        match result {
            Err(CoreError::Config(msg)) => assert!(msg.starts_with("Failed to parse core config")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_missing_file() {
        let result = CoreConfig::from_file("/nonexistent/nebulaai/core.yaml");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "nebulaai-core-config-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "max_retries: 1\n").unwrap();

        let config = CoreConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.max_retries, 1);
        assert_eq!(config.rate_limit, RateLimitConfig::default());
    }
}
