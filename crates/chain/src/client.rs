//! The chain client seam.

use alloy_primitives::Address;
use async_trait::async_trait;
use gnfd_primitives::{BucketName, QuotaLedgerSnapshot, StoragePrice, TxHash, TxOptions};

use crate::ChainResult;

/// Authenticated access to the chain and the storage providers behind it.
///
/// One handle is built per command invocation from configuration and a
/// signing key. Implementations hold no state between calls that would let a
/// previous answer stand in for a fresh one.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait ChainClient: Send + Sync {
    /// Check whether a bucket exists.
    ///
    /// Returns `Ok(false)` when the chain reports the bucket as absent; other
    /// failures are errors.
    async fn head_bucket(&self, bucket: &BucketName) -> ChainResult<bool>;

    /// Current read and store price quoted by a storage provider.
    async fn storage_price(&self, sp_address: &Address) -> ChainResult<StoragePrice>;

    /// Submit a transaction setting the bucket's charged read quota.
    ///
    /// Blocks for as long as `options.commitment` requires.
    async fn buy_quota_for_bucket(
        &self,
        bucket: &BucketName,
        target_quota: u64,
        options: &TxOptions,
    ) -> ChainResult<TxHash>;

    /// Charged, free and consumed read quota for a bucket.
    async fn bucket_read_quota(&self, bucket: &BucketName) -> ChainResult<QuotaLedgerSnapshot>;
}
