//! Bucket names and resource locator resolution.
//!
//! Buckets are addressed on the command line by a URL-like locator
//! (`gnfd://bucket-name/optional/object`). Only the bucket segment matters
//! to quota operations; anything after the first `/` is ignored.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// URL scheme prefix accepted on resource locators.
pub const LOCATOR_SCHEME: &str = "gnfd://";

/// Minimum bucket name length.
pub const MIN_BUCKET_NAME_LEN: usize = 1;

/// Maximum bucket name length.
pub const MAX_BUCKET_NAME_LEN: usize = 63;

/// Errors produced while resolving a locator into a [`BucketName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocatorError {
    /// No locator (or only the scheme) was supplied.
    #[error("no bucket name in locator")]
    Empty,

    /// Name length outside the accepted range.
    #[error("bucket name {name:?} must be at most 63 characters, got {len}")]
    Length { name: String, len: usize },

    /// Name contains a character outside `[a-z0-9-]`.
    #[error("bucket name {name:?} contains invalid character {ch:?}")]
    InvalidCharacter { name: String, ch: char },

    /// Name starts or ends with a hyphen.
    #[error("bucket name {name:?} must start and end with a letter or digit")]
    InvalidBoundary { name: String },
}

/// Canonical name of a bucket on the chain.
///
/// Constructed only through validation, so any `BucketName` in hand satisfies
/// the network's naming rules. Existence on-chain is a separate question and is
/// never cached.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct BucketName(String);

impl BucketName {
    /// Validate and wrap a bare bucket name.
    pub fn new(name: impl Into<String>) -> Result<Self, LocatorError> {
        let name = name.into();
        validate_bucket_name(&name)?;
        Ok(Self(name))
    }

    /// Resolve a resource locator into its bucket name.
    ///
    /// Accepts `gnfd://bucket`, `gnfd://bucket/object/path` and the same
    /// forms without the scheme.
    pub fn from_locator(locator: &str) -> Result<Self, LocatorError> {
        let trimmed = locator.trim();
        let path = trimmed.strip_prefix(LOCATOR_SCHEME).unwrap_or(trimmed);
        let bucket = path.split('/').next().unwrap_or_default();
        if bucket.is_empty() {
            return Err(LocatorError::Empty);
        }
        Self::new(bucket)
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BucketName {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_locator(s)
    }
}

impl TryFrom<String> for BucketName {
    type Error = LocatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BucketName> for String {
    fn from(name: BucketName) -> Self {
        name.0
    }
}

fn validate_bucket_name(name: &str) -> Result<(), LocatorError> {
    if name.is_empty() {
        return Err(LocatorError::Empty);
    }

    let len = name.chars().count();
    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
        return Err(LocatorError::Length {
            name: name.to_string(),
            len,
        });
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(LocatorError::InvalidCharacter {
            name: name.to_string(),
            ch,
        });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(LocatorError::InvalidBoundary {
            name: name.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_locator_with_scheme() {
        let name = BucketName::from_locator("gnfd://photos").unwrap();
        assert_eq!(name.as_str(), "photos");
    }

    #[test]
    fn test_locator_ignores_object_path() {
        let name = BucketName::from_locator("gnfd://photos/2024/cat.png").unwrap();
        assert_eq!(name.as_str(), "photos");

        let name = BucketName::from_locator("gnfd://photos/").unwrap();
        assert_eq!(name.as_str(), "photos");
    }

    #[test]
    fn test_locator_without_scheme() {
        let name = BucketName::from_locator("backups/db.tar").unwrap();
        assert_eq!(name.as_str(), "backups");
    }

    #[test]
    fn test_empty_locator() {
        assert_matches!(BucketName::from_locator(""), Err(LocatorError::Empty));
        assert_matches!(BucketName::from_locator("gnfd://"), Err(LocatorError::Empty));
        assert_matches!(BucketName::from_locator("gnfd:///obj"), Err(LocatorError::Empty));
    }

    #[test]
    fn test_name_rules() {
        assert_matches!(
            BucketName::new("a".repeat(64)),
            Err(LocatorError::Length { len: 64, .. })
        );
        assert_matches!(
            BucketName::new("My-Bucket"),
            Err(LocatorError::InvalidCharacter { ch: 'M', .. })
        );
        assert_matches!(
            BucketName::new("bucket_1"),
            Err(LocatorError::InvalidCharacter { ch: '_', .. })
        );
        assert_matches!(
            BucketName::new("-bucket"),
            Err(LocatorError::InvalidBoundary { .. })
        );
        assert!(BucketName::new("b1-archive-2024").is_ok());
        assert!(BucketName::new("b1").is_ok());
    }

    #[test]
    fn test_serde_validates() {
        let name: BucketName = serde_json::from_str("\"photos\"").unwrap();
        assert_eq!(name.to_string(), "photos");
        assert!(serde_json::from_str::<BucketName>("\"NO\"").is_err());
    }
}
