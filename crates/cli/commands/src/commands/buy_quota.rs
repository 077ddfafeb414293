//! `buy-quota`: set a bucket's charged read quota.

use crate::{BuyQuotaArgs, CliConfig, OutputFormat, output};
use eyre::{Result, WrapErr, bail};
use gnfd_chain::CancellationToken;
use gnfd_primitives::BucketName;
use gnfd_quota::{QuotaError, QuotaPurchase};
use std::io::Write;

pub async fn run(
    args: &BuyQuotaArgs,
    config: &CliConfig,
    format: OutputFormat,
    cancel: &CancellationToken,
    out: &mut impl Write,
) -> Result<()> {
    let bucket = BucketName::from_locator(&args.bucket_url)?;
    if args.charged_quota == 0 {
        return Err(QuotaError::ZeroTargetQuota.into());
    }
    let signer = config.wallet.signer().wrap_err("Failed to load account key")?;
    let client = super::chain_client(config, signer)?;

    let outcome = QuotaPurchase::new(client)
        .buy_quota(&bucket, args.charged_quota, cancel)
        .await?;

    output::render_purchase(out, format, &outcome)?;

    if args.fail_on_reject && !outcome.is_committed() {
        bail!("quota purchase for bucket {bucket} was rejected");
    }
    Ok(())
}
