//! Reusable test utilities:
//! - Mock node RPC server
//! - Mock monitoring-service ping server

// Allow unused code in test fixtures - they are utilities shared across test binaries
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_node;

pub use mock_node::MockNodeServer;
pub use mock_pings::MockPingServer;
