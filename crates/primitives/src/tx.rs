//! Transaction handles and submission options.

use serde::{Deserialize, Serialize};

/// Confirmation level required before a submitted transaction is settled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CommitmentMode {
    /// Return once the transaction is handed to the node.
    FireAndForget,
    /// Wait until the transaction is included in a block.
    #[default]
    Inclusion,
    /// Wait until the including block is final.
    Finality,
}

impl CommitmentMode {
    /// Broadcast mode name understood by the chain endpoint.
    pub const fn broadcast_mode(&self) -> &'static str {
        match self {
            Self::FireAndForget => "BROADCAST_MODE_ASYNC",
            Self::Inclusion => "BROADCAST_MODE_BLOCK",
            Self::Finality => "BROADCAST_MODE_FINALIZED",
        }
    }
}

/// Options applied to a transaction submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOptions {
    /// Commitment level to wait for.
    pub commitment: CommitmentMode,
}

impl TxOptions {
    /// Options waiting for the given commitment level.
    pub const fn with_commitment(commitment: CommitmentMode) -> Self {
        Self { commitment }
    }
}

/// Opaque handle returned by the chain for an accepted transaction.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    /// Wrap a hash string as returned by the chain.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// The hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commitment_is_inclusion() {
        assert_eq!(CommitmentMode::default(), CommitmentMode::Inclusion);
        assert_eq!(TxOptions::default().commitment, CommitmentMode::Inclusion);
    }

    #[test]
    fn test_broadcast_modes() {
        assert_eq!(
            CommitmentMode::FireAndForget.broadcast_mode(),
            "BROADCAST_MODE_ASYNC"
        );
        assert_eq!(CommitmentMode::Inclusion.broadcast_mode(), "BROADCAST_MODE_BLOCK");
        assert_eq!(
            CommitmentMode::Finality.broadcast_mode(),
            "BROADCAST_MODE_FINALIZED"
        );
    }

    #[test]
    fn test_commitment_names() {
        assert_eq!(CommitmentMode::FireAndForget.to_string(), "fire-and-forget");
        assert_eq!(
            "finality".parse::<CommitmentMode>().unwrap(),
            CommitmentMode::Finality
        );
    }
}
