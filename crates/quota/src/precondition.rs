//! Bucket existence check shared by purchase and reporting.

use gnfd_chain::{CancellationToken, ChainClient, with_cancel};
use gnfd_primitives::BucketName;
use tracing::debug;

use crate::{QuotaError, QuotaResult};

/// Fail with [`QuotaError::BucketNotFound`] unless the chain reports the bucket.
///
/// Asked fresh on every call; nothing is cached between invocations.
pub(crate) async fn ensure_bucket_exists<C: ChainClient>(
    client: &C,
    bucket: &BucketName,
    cancel: &CancellationToken,
) -> QuotaResult<()> {
    let exists = with_cancel(cancel, client.head_bucket(bucket)).await?;
    debug!(%bucket, exists, "checked bucket");
    if exists {
        Ok(())
    } else {
        Err(QuotaError::BucketNotFound {
            bucket: bucket.clone(),
        })
    }
}
