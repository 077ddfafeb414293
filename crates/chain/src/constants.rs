//! Default chain endpoints and request settings.

/// Default chain REST endpoint (mainnet).
pub const DEFAULT_RPC_ADDR: &str = "https://greenfield-chain.bnbchain.org";

/// Default chain identifier (mainnet).
pub const DEFAULT_CHAIN_ID: &str = "greenfield_1017-1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("gnfd/", env!("CARGO_PKG_VERSION"));
