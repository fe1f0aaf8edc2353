//! Mock node RPC server
//!
//! Simulates Substrate-style chain RPC responses without requiring a real
//! node.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Finalized head hash returned by the mock `chain_getFinalizedHead`
pub const FINALIZED_HASH: &str =
    "0x4f9d2c81a7e3b065d1f8c4a29b7e6d035a8c1e9f7b3d50264c8e1a9f6b2d7c30";

/// Mock RPC server that simulates chain responses
pub struct MockNodeServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockNodeServer {
    /// Create a new mock node server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mock a node at the given heights: latest header, finalized head and
    /// the finalized header lookup.
    pub async fn mock_chain_state(&self, latest: u64, finalized: u64) {
        Mock::given(method("POST"))
            .and(body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "chain_getHeader",
                "params": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "number": format!("{:#x}", latest),
                    "parentHash": FINALIZED_HASH
                }
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "chain_getFinalizedHead",
                "params": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": FINALIZED_HASH
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "chain_getHeader",
                "params": [FINALIZED_HASH]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "number": format!("{:#x}", finalized),
                    "parentHash": FINALIZED_HASH
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a JSON-RPC error object on every call, with the given HTTP status
    pub async fn mock_rpc_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {
                    "code": -32601,
                    "message": message
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a latest-header response without the `number` field
    pub async fn mock_header_missing_number(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "parentHash": FINALIZED_HASH
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a null finalized head after a valid latest header
    pub async fn mock_finalized_head_missing(&self, latest: u64) {
        Mock::given(method("POST"))
            .and(body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "chain_getHeader",
                "params": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "number": format!("{:#x}", latest)
                }
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "chain_getFinalizedHead",
                "params": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": null
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a non-JSON error page, as a reverse proxy in front of the node
    /// would serve
    pub async fn mock_plain_http_error(&self, status: u16) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("Service Unavailable"))
            .mount(&self.server)
            .await;
    }

    /// Mock a response delayed past any reasonable client timeout
    pub async fn mock_slow_response(&self, delay: Duration) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(delay)
                    .set_body_json(json!({
                        "jsonrpc": "2.0",
                        "id": 1,
                        "result": { "number": "0x1" }
                    })),
            )
            .mount(&self.server)
            .await;
    }
}
