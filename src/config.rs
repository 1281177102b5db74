//! Configuration management for the SSN validator server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; dotenvy never writes to stdout, which
//! MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{Denylist, SsnValidator};
use std::env;

/// Configuration for the SSN validator server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Additional forged SSNs to reject on top of the built-in ones
    pub extra_denylist: Vec<String>,

    /// Maximum number of values accepted by a batch validation call (default: 1000)
    pub max_batch_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `SSN_EXTRA_DENYLIST`: Comma-separated forged SSNs, dashes allowed (default: none)
    /// - `MAX_BATCH_SIZE`: Max values per batch call (default: 1000)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let extra_denylist = match env::var("SSN_EXTRA_DENYLIST") {
            Ok(val) => Self::parse_list(&val),
            Err(_) => Vec::new(),
        };

        let max_batch_size = Self::parse_env_usize("MAX_BATCH_SIZE", 1000)?;
        if max_batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_BATCH_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let config = Config {
            log_level,
            extra_denylist,
            max_batch_size,
        };

        // Surface malformed denylist entries at startup rather than per request
        config.build_validator()?;

        Ok(config)
    }

    /// Build the SSN validator described by this configuration.
    pub fn build_validator(&self) -> ConfigResult<SsnValidator> {
        let denylist =
            Denylist::with_extra(&self.extra_denylist).map_err(|e| ConfigError::InvalidValue {
                var: "SSN_EXTRA_DENYLIST".to_string(),
                reason: e.to_string(),
            })?;

        Ok(SsnValidator::new(denylist))
    }

    /// Split a comma-separated list, dropping blank items.
    fn parse_list(val: &str) -> Vec<String> {
        val.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            extra_denylist: Vec::new(),
            max_batch_size: 1000,
        }
    }
}
