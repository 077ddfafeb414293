//! Chain client error types.
//!
//! Variants carry the endpoint and status they came from so diagnostics can
//! name the failing call without extra context.

/// Errors from chain and storage provider calls.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// HTTP transport failure (connection refused, timeout, TLS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// The chain accepted the request but rejected the transaction.
    #[error("transaction rejected with code {code}: {log}")]
    TxRejected {
        code: u32,
        log: String,
        tx_hash: Option<String>,
    },

    /// Encoding the request body failed.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// Signing the request failed.
    #[error("signing failed: {0}")]
    Signing(#[from] alloy_signer::Error),

    /// The client is missing configuration needed for this call.
    #[error("configuration error: {0}")]
    Config(String),

    /// The operation scope was cancelled before the call completed.
    #[error("operation cancelled")]
    Cancelled,
}

/// Result type for chain operations.
pub type ChainResult<T> = core::result::Result<T, ChainError>;
