//! Read quota reporting.

use gnfd_chain::{CancellationToken, ChainClient, with_cancel};
use gnfd_primitives::{BucketName, QuotaLedgerSnapshot};
use tracing::debug;

use crate::{QuotaResult, precondition::ensure_bucket_exists};

/// Reports a bucket's current read quota ledger.
#[derive(Debug, Clone)]
pub struct QuotaReporter<C> {
    client: C,
}

impl<C: ChainClient> QuotaReporter<C> {
    /// Create a reporter reading through `client`.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Charged, free and consumed read quota of `bucket`.
    ///
    /// The bucket must exist. Counters are returned exactly as the storage
    /// provider reports them.
    pub async fn quota_info(
        &self,
        bucket: &BucketName,
        cancel: &CancellationToken,
    ) -> QuotaResult<QuotaLedgerSnapshot> {
        ensure_bucket_exists(&self.client, bucket, cancel).await?;

        let snapshot = with_cancel(cancel, self.client.bucket_read_quota(bucket)).await?;
        debug!(
            %bucket,
            charged = snapshot.charged_quota_size,
            free = snapshot.provider_free_quota_size,
            consumed = snapshot.consumed_quota_size,
            "read quota"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuotaError, QuotaErrorKind};
    use assert_matches::assert_matches;
    use gnfd_test_utils::{ChainCall, StubChainClient};

    fn bucket(name: &str) -> BucketName {
        BucketName::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_reports_ledger_unmodified() {
        let stub = StubChainClient::new()
            .with_bucket("b1")
            .with_ledger(1_000_000, 200_000, 50_000);

        let snapshot = QuotaReporter::new(&stub)
            .quota_info(&bucket("b1"), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            snapshot,
            QuotaLedgerSnapshot {
                charged_quota_size: 1_000_000,
                provider_free_quota_size: 200_000,
                consumed_quota_size: 50_000,
            }
        );
        assert_eq!(
            stub.calls(),
            vec![
                ChainCall::HeadBucket(bucket("b1")),
                ChainCall::ReadQuota(bucket("b1")),
            ]
        );
    }

    #[tokio::test]
    async fn test_overconsumption_is_reported_as_is() {
        let stub = StubChainClient::new()
            .with_bucket("b1")
            .with_ledger(100, 10, 500);

        let snapshot = QuotaReporter::new(&stub)
            .quota_info(&bucket("b1"), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(snapshot.consumed_quota_size, 500);
    }

    #[tokio::test]
    async fn test_missing_bucket_skips_ledger() {
        let stub = StubChainClient::new().with_ledger(1, 2, 3);

        let result = QuotaReporter::new(&stub)
            .quota_info(&bucket("nope"), &CancellationToken::new())
            .await;

        assert_matches!(result, Err(QuotaError::BucketNotFound { .. }));
        assert!(!stub.calls().iter().any(|call| matches!(call, ChainCall::ReadQuota(_))));
    }

    #[tokio::test]
    async fn test_ledger_failure_is_chain_error() {
        let stub = StubChainClient::new().with_bucket("b1");

        let err = QuotaReporter::new(&stub)
            .quota_info(&bucket("b1"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), QuotaErrorKind::Chain);
    }
}
