//! Read quota accounting.

use serde::{Deserialize, Serialize};

/// Point-in-time read quota counters for a bucket, in bytes.
///
/// Values are reported as the storage provider returns them. Consumption may
/// exceed `charged + free` when provider enforcement lags; that is not
/// checked here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaLedgerSnapshot {
    /// Purchased (chargeable) read quota.
    pub charged_quota_size: u64,
    /// Free read quota granted by the storage provider.
    pub provider_free_quota_size: u64,
    /// Read quota consumed in the current period.
    pub consumed_quota_size: u64,
}
