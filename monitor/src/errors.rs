//! Custom error types for the finality monitor
//!
//! Provides structured error handling with context for the failure
//! scenarios of a check cycle.

use std::fmt;

/// Main error type for the finality monitor
#[derive(Debug)]
pub enum MonitorError {
    /// Configuration or preflight errors, raised before any network activity
    Config(ConfigError),

    /// Connection, timeout or malformed-response failure reaching an endpoint
    Transport { url: String, reason: String },

    /// Well-formed JSON-RPC error object returned by the node
    RpcProtocol { method: String, message: String },

    /// Expected response field absent or empty
    MissingField { method: String, field: String },

    /// Malformed hexadecimal block number
    InvalidFormat { value: String, reason: String },

    /// Ping delivery failed or returned a non-success status
    Delivery { url: String, reason: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Missing required environment variable
    MissingRequired { field: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Log file could not be opened or created
    LogFileUnavailable { path: String, reason: String },

    /// HTTP client construction failed
    HttpClient { reason: String },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Config(e) => write!(f, "Configuration error: {}", e),
            MonitorError::Transport { url, reason } => {
                write!(f, "Transport error for {}: {}", url, reason)
            }
            MonitorError::RpcProtocol { method, message } => {
                write!(f, "RPC error from '{}': {}", method, message)
            }
            MonitorError::MissingField { method, field } => {
                write!(f, "Missing field '{}' in '{}' response", field, method)
            }
            MonitorError::InvalidFormat { value, reason } => {
                write!(f, "Invalid block number '{}': {}", value, reason)
            }
            MonitorError::Delivery { url, reason } => {
                write!(f, "Ping delivery to {} failed: {}", url, reason)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required environment variable: {}", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::LogFileUnavailable { path, reason } => {
                write!(f, "Cannot open log file '{}': {}", path, reason)
            }
            ConfigError::HttpClient { reason } => {
                write!(f, "Failed to create HTTP client: {}", reason)
            }
        }
    }
}

impl std::error::Error for MonitorError {}
impl std::error::Error for ConfigError {}

impl From<ConfigError> for MonitorError {
    fn from(err: ConfigError) -> Self {
        MonitorError::Config(err)
    }
}
