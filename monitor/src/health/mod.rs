//! Health checking for the monitored node

pub mod chain;
pub mod evaluator;
pub mod monitor;
pub mod types;

pub use chain::ChainStateReader;
pub use monitor::HealthMonitor;
pub use types::{ChainSnapshot, CheckOutcome, HealthVerdict};
