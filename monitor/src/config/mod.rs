//! Environment-sourced configuration
//!
//! The configuration is read once at process entry into an immutable value
//! and passed explicitly to each component.

use std::env;
use std::time::Duration;

use crate::constants::{defaults, env_vars};
use crate::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub max_allowed_gap: u64,
    pub node_id: String,
    pub timeout_seconds: u64,
    pub log_file: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration from an arbitrary key lookup
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = get(env_vars::RPC_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| defaults::RPC_URL.to_string());

        let node_id = get(env_vars::NODE_ID)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired {
                field: env_vars::NODE_ID.to_string(),
            })?;

        let max_allowed_gap =
            parse_u64(&get, env_vars::MAX_ALLOWED_GAP, defaults::MAX_ALLOWED_GAP)?;

        let timeout_seconds = parse_u64(&get, env_vars::TIMEOUT, defaults::TIMEOUT_SECONDS)?;
        if timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: env_vars::TIMEOUT.to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        let log_file = get(env_vars::LOG_FILE)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| defaults::LOG_FILE.to_string());

        Ok(Self {
            rpc_url,
            max_allowed_gap,
            node_id,
            timeout_seconds,
            log_file,
        })
    }

    /// Timeout applied to every network operation
    pub fn network_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn parse_u64<F>(get: &F, field: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(field) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{}' is not a valid unsigned integer: {}", raw, e),
        }),
    }
}
