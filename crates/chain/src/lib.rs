//! Chain access for the gnfd client.
//!
//! - [`ChainClient`] - the seam the quota core talks through
//! - [`HttpChainClient`] - JSON-over-HTTP implementation signing with a local key
//! - [`with_cancel`] - run a call inside a cancellable operation scope
//! - [`ChainArgs`] / [`ChainConfig`] - endpoint configuration
//!
//! Nothing here retries. Errors are returned as [`ChainError`] and the caller
//! owns the retry policy.

pub mod args;
mod cancel;
mod client;
mod config;
pub mod constants;
mod error;
mod http;
pub mod msg;

pub use args::ChainArgs;
pub use cancel::with_cancel;
pub use client::ChainClient;
pub use config::ChainConfig;
pub use error::{ChainError, ChainResult};
pub use http::HttpChainClient;
pub use msg::{BroadcastRequest, MsgUpdateBucketInfo};

pub use tokio_util::sync::CancellationToken;
