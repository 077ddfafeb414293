//! Command result rendering.

use gnfd_primitives::{BucketName, QuotaLedgerSnapshot, QuotaPrice};
use gnfd_quota::PurchaseOutcome;
use serde::Serialize;
use std::io::{self, Write};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per command.
    Json,
}

/// Write a provider's prices.
pub fn render_price(
    out: &mut impl Write,
    format: OutputFormat,
    price: &QuotaPrice,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "get bucket read quota price: {}  wei/byte",
                price.read_price_per_byte
            )?;
            writeln!(
                out,
                "get bucket storage price: {}  wei/byte",
                price.store_price_per_byte
            )
        }
        OutputFormat::Json => write_json(out, price),
    }
}

/// Write the outcome of a quota purchase.
pub fn render_purchase(
    out: &mut impl Write,
    format: OutputFormat,
    outcome: &PurchaseOutcome,
) -> io::Result<()> {
    match (format, outcome) {
        (OutputFormat::Text, PurchaseOutcome::Committed { bucket, tx_hash }) => {
            writeln!(out, "buy quota for bucket: {bucket} successfully, txn hash: {tx_hash}")
        }
        (OutputFormat::Text, PurchaseOutcome::Rejected { reason, tx_hash, .. }) => {
            match tx_hash {
                Some(tx_hash) => writeln!(out, "buy quota error: {reason}, txn hash: {tx_hash}"),
                None => writeln!(out, "buy quota error: {reason}"),
            }
        }
        (OutputFormat::Json, outcome) => write_json(out, outcome),
    }
}

/// Write a bucket's read quota ledger.
pub fn render_quota(
    out: &mut impl Write,
    format: OutputFormat,
    bucket: &BucketName,
    snapshot: &QuotaLedgerSnapshot,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "quota info:")?;
            writeln!(out, " charged quota:{}", snapshot.charged_quota_size)?;
            writeln!(out, " free quota:{}", snapshot.provider_free_quota_size)?;
            writeln!(out, " consumed quota:{}", snapshot.consumed_quota_size)
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct QuotaInfo<'a> {
                bucket: &'a BucketName,
                #[serde(flatten)]
                snapshot: &'a QuotaLedgerSnapshot,
            }
            write_json(out, &QuotaInfo { bucket, snapshot })
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
