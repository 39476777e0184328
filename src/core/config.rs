//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Sample data generation settings shared by every tool.
    pub sampling: SamplingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the generated sample data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed RNG seed. When set, every call produces the same data.
    pub seed: Option<u64>,

    /// Pinned "today" used for relative dates and forecast horizons.
    pub reference_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "travel-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SAMPLE_SEED`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env()?;
        config.sampling = SamplingConfig::from_env()?;

        Ok(config)
    }
}

impl SamplingConfig {
    /// Read `MCP_SAMPLE_SEED` and `MCP_REFERENCE_DATE`.
    pub fn from_env() -> Result<Self> {
        let mut sampling = Self::default();

        if let Ok(raw) = std::env::var("MCP_SAMPLE_SEED") {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                Error::config(format!("MCP_SAMPLE_SEED must be an unsigned integer: {}", e))
            })?;
            sampling.seed = Some(seed);
        }

        if let Ok(raw) = std::env::var("MCP_REFERENCE_DATE") {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                Error::config(format!("MCP_REFERENCE_DATE must be YYYY-MM-DD: {}", e))
            })?;
            sampling.reference_date = Some(date);
        }

        Ok(sampling)
    }
}

/// Serializes tests that mutate `MCP_*` environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_sampling_env() {
        unsafe {
            std::env::remove_var("MCP_SAMPLE_SEED");
            std::env::remove_var("MCP_REFERENCE_DATE");
        }
    }

    #[test]
    fn test_sampling_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_SAMPLE_SEED", "42");
            std::env::set_var("MCP_REFERENCE_DATE", "2024-03-15");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.sampling.seed, Some(42));
        assert_eq!(
            config.sampling.reference_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        clear_sampling_env();
    }

    #[test]
    fn test_sampling_defaults_to_entropy() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_sampling_env();
        let config = Config::from_env().unwrap();
        assert!(config.sampling.seed.is_none());
        assert!(config.sampling.reference_date.is_none());
    }

    #[test]
    fn test_invalid_seed_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_SAMPLE_SEED", "not-a-number");
        }
        let result = Config::from_env();
        clear_sampling_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_reference_date_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            std::env::set_var("MCP_REFERENCE_DATE", "15/03/2024");
        }
        let result = Config::from_env();
        clear_sampling_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "travel-mcp-server");
        assert_eq!(config.logging.level, "info");
    }
}
