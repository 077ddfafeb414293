//! Shared data model for the gnfd client.
//!
//! - [`BucketName`] - validated bucket name, resolved from a `gnfd://` locator
//! - [`StoragePrice`] / [`QuotaPrice`] - raw and converted provider prices
//! - [`QuotaLedgerSnapshot`] - charged, free and consumed read quota
//! - [`TxHash`] / [`TxOptions`] / [`CommitmentMode`] - transaction submission
//!
//! Every value here is built fresh for one command and dropped afterwards.

mod bucket;
mod price;
mod quota;
mod tx;

pub use bucket::{
    BucketName, LOCATOR_SCHEME, LocatorError, MAX_BUCKET_NAME_LEN, MIN_BUCKET_NAME_LEN,
};
pub use price::{QuotaPrice, StoragePrice};
pub use quota::QuotaLedgerSnapshot;
pub use tx::{CommitmentMode, TxHash, TxOptions};
