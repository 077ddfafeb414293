//! `quota-info`: read quota ledger of a bucket.

use crate::{CliConfig, OutputFormat, QuotaInfoArgs, output};
use eyre::{Result, WrapErr, eyre};
use gnfd_chain::CancellationToken;
use gnfd_primitives::BucketName;
use gnfd_quota::QuotaReporter;
use std::io::Write;

pub async fn run(
    args: &QuotaInfoArgs,
    config: &CliConfig,
    format: OutputFormat,
    cancel: &CancellationToken,
    out: &mut impl Write,
) -> Result<()> {
    let bucket = BucketName::from_locator(&args.bucket_url)?;
    if config.chain.sp_endpoint.is_none() {
        return Err(eyre!(
            "No storage provider endpoint configured. Use --sp-endpoint or GNFD_CHAIN__SP_ENDPOINT"
        ));
    }

    let signer = config.wallet.signer().wrap_err("Failed to load account key")?;
    let client = super::chain_client(config, signer)?;

    let snapshot = QuotaReporter::new(client).quota_info(&bucket, cancel).await?;

    output::render_quota(out, format, &bucket, &snapshot)?;
    Ok(())
}
