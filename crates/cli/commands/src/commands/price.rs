//! `get-price`: read and store price of a storage provider.

use crate::{CliConfig, GetPriceArgs, OutputFormat, output};
use eyre::{Result, WrapErr};
use gnfd_chain::{CancellationToken, HttpChainClient};
use gnfd_quota::PriceOracle;
use std::io::Write;

pub async fn run(
    args: &GetPriceArgs,
    config: &CliConfig,
    format: OutputFormat,
    cancel: &CancellationToken,
    out: &mut impl Write,
) -> Result<()> {
    let client =
        HttpChainClient::unsigned(&config.chain).wrap_err("Failed to build chain client")?;

    let price = PriceOracle::new(client)
        .quota_price(args.sp_address.as_deref().unwrap_or_default(), cancel)
        .await?;

    output::render_price(out, format, &price)?;
    Ok(())
}
