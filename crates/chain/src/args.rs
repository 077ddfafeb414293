//! CLI arguments for chain access.

use clap::Args;
use serde::{Deserialize, Serialize};

/// Chain endpoint overrides.
///
/// Every field is optional so that only flags actually given on the command
/// line override the config file and environment.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Chain")]
pub struct ChainArgs {
    /// Chain REST endpoint.
    #[arg(long = "rpc-addr", alias = "rpcAddr", value_name = "URL", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_addr: Option<String>,

    /// Chain identifier.
    #[arg(long = "chain-id", alias = "chainId", value_name = "ID", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,

    /// Storage provider endpoint for read quota queries.
    #[arg(long = "sp-endpoint", value_name = "URL", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_endpoint: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}
