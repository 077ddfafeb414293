//! Chain endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Where and how to reach the chain and storage provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain REST endpoint.
    pub rpc_addr: String,

    /// Chain identifier included in signed transactions.
    pub chain_id: String,

    /// Storage provider endpoint used for read quota queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_endpoint: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_addr: DEFAULT_RPC_ADDR.to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            sp_endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ChainConfig {
    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
