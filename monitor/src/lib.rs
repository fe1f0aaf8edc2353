//! Periodic finality health monitor for a blockchain validator node
//!
//! One invocation runs a single poll-evaluate-report cycle: read the
//! latest and finalized block heights over the node's JSON-RPC interface,
//! classify the finalization lag against the configured threshold, and
//! report the verdict to a dead-man's-switch monitoring service.

pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod hex;
pub mod logging;
pub mod rpc;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use errors::{ConfigError, MonitorError};
pub use health::{ChainSnapshot, ChainStateReader, CheckOutcome, HealthMonitor, HealthVerdict};
pub use rpc::RpcClient;
pub use services::ReportService;
