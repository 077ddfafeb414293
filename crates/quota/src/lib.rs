//! Read quota operations for gnfd buckets.
//!
//! Three components share one [`ChainClient`](gnfd_chain::ChainClient):
//!
//! - [`PriceOracle`]: per-byte read and store prices of a storage provider
//! - [`QuotaPurchase`]: sets a bucket's charged read quota on chain
//! - [`QuotaReporter`]: current read quota ledger of a bucket
//!
//! Every operation takes a [`CancellationToken`](gnfd_chain::CancellationToken)
//! scoping its network calls.

mod error;
mod oracle;
mod precondition;
mod purchase;
mod report;

pub use error::{PriceField, QuotaError, QuotaErrorKind, QuotaResult};
pub use oracle::PriceOracle;
pub use purchase::{PurchaseOutcome, QuotaPurchase};
pub use report::QuotaReporter;
