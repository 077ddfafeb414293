//! Storage provider price lookup.

use alloy_primitives::Address;
use gnfd_chain::{CancellationToken, ChainClient, with_cancel};
use gnfd_primitives::QuotaPrice;
use tracing::debug;

use crate::{PriceField, QuotaError, QuotaResult};

/// Queries the chain for the per-byte prices a storage provider charges.
///
/// Pure query: safe to call repeatedly or concurrently.
#[derive(Debug, Clone)]
pub struct PriceOracle<C> {
    client: C,
}

impl<C: ChainClient> PriceOracle<C> {
    /// Create an oracle over the given chain client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Current read and store price of the provider at `sp_address`.
    ///
    /// The address is checked before any network call. Both prices must
    /// convert or the whole lookup fails.
    pub async fn quota_price(
        &self,
        sp_address: &str,
        cancel: &CancellationToken,
    ) -> QuotaResult<QuotaPrice> {
        let address = parse_sp_address(sp_address)?;

        let raw = with_cancel(cancel, self.client.storage_price(&address)).await?;
        debug!(%address, read = %raw.read_price, store = %raw.store_price, "storage price");

        let read_price_per_byte = parse_price(PriceField::Read, &raw.read_price)?;
        let store_price_per_byte = parse_price(PriceField::Store, &raw.store_price)?;

        Ok(QuotaPrice {
            read_price_per_byte,
            store_price_per_byte,
        })
    }
}

fn parse_sp_address(sp_address: &str) -> QuotaResult<Address> {
    let trimmed = sp_address.trim();
    if trimmed.is_empty() {
        return Err(QuotaError::MissingAddress);
    }

    trimmed
        .parse::<Address>()
        .map_err(|e| QuotaError::InvalidAddress {
            address: sp_address.to_string(),
            reason: e.to_string(),
        })
}

/// Convert a chain decimal string (e.g. `"0.087000000000000000"`) to `f64`.
fn parse_price(field: PriceField, value: &str) -> QuotaResult<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|e| QuotaError::PriceParse {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    if !parsed.is_finite() {
        return Err(QuotaError::PriceParse {
            field,
            value: value.to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    Ok(parsed)
}
