//! Storage provider price quotes.

use serde::{Deserialize, Serialize};

/// Prices exactly as the chain reports them: scaled decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePrice {
    /// Read price per byte, e.g. `"0.087000000000000000"`.
    pub read_price: String,
    /// Store price per byte.
    pub store_price: String,
}

/// Per-byte prices converted for display.
///
/// Denominated in the chain's smallest fee unit (wei) per byte. A snapshot of
/// the instant it was queried; nothing keeps it fresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotaPrice {
    /// Price of one byte of read quota.
    pub read_price_per_byte: f64,
    /// Price of storing one byte.
    pub store_price_per_byte: f64,
}
