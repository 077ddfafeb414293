//! Quota operation errors.

use gnfd_chain::ChainError;
use gnfd_primitives::BucketName;

/// Which price failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PriceField {
    #[strum(serialize = "read price")]
    Read,
    #[strum(serialize = "store price")]
    Store,
}

/// Coarse classification of a [`QuotaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum QuotaErrorKind {
    /// Bad caller input, caught before any network call.
    Input,
    /// The bucket does not exist.
    Precondition,
    /// The chain returned a price that could not be converted.
    Oracle,
    /// A chain or storage provider call failed.
    Chain,
    /// The operation scope was cancelled.
    Cancelled,
}

/// Hard failures of quota operations.
///
/// A chain rejecting a purchase is not one of these: see
/// [`PurchaseOutcome::Rejected`](crate::PurchaseOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum QuotaError {
    /// No storage provider address was given.
    #[error("fail to fetch sp address")]
    MissingAddress,

    /// The storage provider address is not a valid account address.
    #[error("invalid sp address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The requested target quota is zero.
    #[error("target quota not set")]
    ZeroTargetQuota,

    /// The bucket does not exist on chain.
    #[error("bucket {bucket} not exist")]
    BucketNotFound { bucket: BucketName },

    /// A price from the chain is not a finite decimal.
    #[error("failed to parse {field} {value:?}: {reason}")]
    PriceParse {
        field: PriceField,
        value: String,
        reason: String,
    },

    /// The operation scope was cancelled.
    #[error("operation cancelled")]
    Cancelled,

    /// A chain or storage provider call failed.
    #[error(transparent)]
    Chain(ChainError),
}

impl QuotaError {
    /// Classification used for diagnostics and exit handling.
    pub fn kind(&self) -> QuotaErrorKind {
        match self {
            Self::MissingAddress | Self::InvalidAddress { .. } | Self::ZeroTargetQuota => {
                QuotaErrorKind::Input
            }
            Self::BucketNotFound { .. } => QuotaErrorKind::Precondition,
            Self::PriceParse { .. } => QuotaErrorKind::Oracle,
            Self::Cancelled => QuotaErrorKind::Cancelled,
            Self::Chain(_) => QuotaErrorKind::Chain,
        }
    }
}

impl From<ChainError> for QuotaError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Cancelled => Self::Cancelled,
            other => Self::Chain(other),
        }
    }
}

/// Result type for quota operations.
pub type QuotaResult<T> = core::result::Result<T, QuotaError>;
