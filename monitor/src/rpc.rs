//! JSON-RPC 2.0 client for the node endpoint

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;
use tracing::debug;

use crate::errors::{ConfigError, MonitorError};

/// HTTP JSON-RPC client with a bounded timeout.
///
/// Every call is a single attempt; retry-by-re-invocation is the job of
/// the external scheduler.
pub struct RpcClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl RpcClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, MonitorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    /// Issue a single JSON-RPC call and return the full decoded response body
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, MonitorError> {
        let request_body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        debug!("RPC call '{}' to {}", method, self.url);

        let response = timeout(
            self.timeout,
            self.client.post(&self.url).json(&request_body).send(),
        )
        .await
        .map_err(|_| MonitorError::Transport {
            url: self.url.clone(),
            reason: format!("request timed out after {}s", self.timeout.as_secs()),
        })?
        .map_err(|e| MonitorError::Transport {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return Err(MonitorError::Transport {
                    url: self.url.clone(),
                    reason: format!("invalid JSON-RPC response (HTTP {}): {}", status, e),
                })
            }
        };

        // A JSON-RPC error object takes precedence over the HTTP status line
        if let Some(message) = body["error"]["message"].as_str() {
            if !message.is_empty() {
                return Err(MonitorError::RpcProtocol {
                    method: method.to_string(),
                    message: message.to_string(),
                });
            }
        }

        if !status.is_success() {
            return Err(MonitorError::Transport {
                url: self.url.clone(),
                reason: format!("RPC endpoint returned HTTP {}", status),
            });
        }

        Ok(body)
    }
}
