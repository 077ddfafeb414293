//! Read quota purchase.

use gnfd_chain::{CancellationToken, ChainClient, ChainError, with_cancel};
use gnfd_primitives::{BucketName, CommitmentMode, TxHash, TxOptions};
use serde::Serialize;
use tracing::{info, warn};

use crate::{QuotaError, QuotaResult, precondition::ensure_bucket_exists};

/// Result of a purchase that reached the chain.
///
/// A rejected transaction is an expected outcome for an operator, not a
/// failure of the orchestration, so it is carried here rather than in
/// [`QuotaError`]. Callers decide whether a rejection should fail their
/// process. Failures that leave the transaction's fate unknown (transport,
/// unreadable answer) are errors, never rejections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PurchaseOutcome {
    /// The chain accepted the quota update at the requested commitment level.
    Committed { bucket: BucketName, tx_hash: TxHash },
    /// The chain refused the transaction.
    ///
    /// `tx_hash` is set when the failed transaction was still included, and
    /// charged, on chain.
    Rejected {
        bucket: BucketName,
        reason: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tx_hash: Option<TxHash>,
    },
}

impl PurchaseOutcome {
    /// Whether the purchase was accepted.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// Transaction handle, whenever the chain reported one.
    pub fn tx_hash(&self) -> Option<&TxHash> {
        match self {
            Self::Committed { tx_hash, .. } => Some(tx_hash),
            Self::Rejected { tx_hash, .. } => tx_hash.as_ref(),
        }
    }
}

/// Sets a bucket's charged read quota on chain.
///
/// Steps, stopping at the first failure:
/// 1. reject a zero target quota
/// 2. check that the bucket exists
/// 3. submit the update and wait for the configured [`CommitmentMode`]
/// 4. report the transaction hash, or the rejection reason
#[derive(Debug, Clone)]
pub struct QuotaPurchase<C> {
    client: C,
    commitment: CommitmentMode,
}

impl<C: ChainClient> QuotaPurchase<C> {
    /// Create an orchestrator waiting for block inclusion.
    pub fn new(client: C) -> Self {
        Self {
            client,
            commitment: CommitmentMode::Inclusion,
        }
    }

    /// Use a different commitment level for submissions.
    pub fn with_commitment(mut self, commitment: CommitmentMode) -> Self {
        self.commitment = commitment;
        self
    }

    /// Commitment level submissions wait for.
    pub fn commitment(&self) -> CommitmentMode {
        self.commitment
    }

    /// Set `bucket`'s charged read quota to `target_quota` bytes.
    pub async fn buy_quota(
        &self,
        bucket: &BucketName,
        target_quota: u64,
        cancel: &CancellationToken,
    ) -> QuotaResult<PurchaseOutcome> {
        if target_quota == 0 {
            return Err(QuotaError::ZeroTargetQuota);
        }

        ensure_bucket_exists(&self.client, bucket, cancel).await?;

        let options = TxOptions::with_commitment(self.commitment);
        let submitted = with_cancel(
            cancel,
            self.client.buy_quota_for_bucket(bucket, target_quota, &options),
        )
        .await;

        match submitted {
            Ok(tx_hash) => {
                info!(
                    %bucket,
                    target_quota,
                    %tx_hash,
                    commitment = %self.commitment,
                    "bought quota"
                );
                Ok(PurchaseOutcome::Committed {
                    bucket: bucket.clone(),
                    tx_hash,
                })
            }
            Err(err) => {
                let Some(tx_hash) = rejection(&err) else {
                    return Err(err.into());
                };
                warn!(%bucket, target_quota, error = %err, "quota purchase rejected");
                Ok(PurchaseOutcome::Rejected {
                    bucket: bucket.clone(),
                    reason: err.to_string(),
                    tx_hash,
                })
            }
        }
    }
}

/// Classify a submission error.
///
/// Returns `Some(hash)` when the chain refused the transaction, carrying the
/// hash of an included failure. `None` means the error is not a refusal.
fn rejection(err: &ChainError) -> Option<Option<TxHash>> {
    match err {
        ChainError::TxRejected { tx_hash, .. } => Some(tx_hash.as_deref().map(TxHash::new)),
        ChainError::Api { .. } => Some(None),
        _ => None,
    }
}
