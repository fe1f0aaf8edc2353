//! Chain state reading over the node RPC
//!
//! Fetches the latest and finalized block heights as two sequential,
//! independent round-trips. The chain may advance between them; the
//! resulting snapshot is best-effort, not atomic.

use serde_json::{json, Value};
use tracing::debug;

use crate::errors::MonitorError;
use crate::hex::decode_block_number;
use crate::rpc::RpcClient;

use super::types::ChainSnapshot;

pub struct ChainStateReader {
    rpc: RpcClient,
}

impl ChainStateReader {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Height of the newest header the node knows about
    pub async fn latest_block(&self) -> Result<u64, MonitorError> {
        let response = self.rpc.call("chain_getHeader", json!([])).await?;
        extract_block_number(&response, "chain_getHeader")
    }

    /// Height of the most recent finalized header.
    ///
    /// Two round-trips: the finalized head hash, then the header at that
    /// hash.
    pub async fn finalized_block(&self) -> Result<u64, MonitorError> {
        let response = self.rpc.call("chain_getFinalizedHead", json!([])).await?;
        let hash = response["result"]
            .as_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| MonitorError::MissingField {
                method: "chain_getFinalizedHead".to_string(),
                field: "result".to_string(),
            })?
            .to_string();

        let response = self.rpc.call("chain_getHeader", json!([hash])).await?;
        extract_block_number(&response, "chain_getHeader")
    }

    /// Read both heights, latest first then finalized
    pub async fn snapshot(&self) -> Result<ChainSnapshot, MonitorError> {
        let latest = self.latest_block().await?;
        debug!("Latest block height: {}", latest);

        let finalized = self.finalized_block().await?;
        debug!("Finalized block height: {}", finalized);

        Ok(ChainSnapshot { latest, finalized })
    }
}

fn extract_block_number(response: &Value, method: &str) -> Result<u64, MonitorError> {
    let number = response["result"]["number"]
        .as_str()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| MonitorError::MissingField {
            method: method.to_string(),
            field: "result.number".to_string(),
        })?;

    decode_block_number(number)
}
