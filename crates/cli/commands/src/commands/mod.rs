//! Command implementations.
//!
//! Each command runs inside a child of the process-wide shutdown token, so
//! Ctrl-C cancels whatever network call is in flight.

pub mod buy_quota;
pub mod price;
pub mod quota_info;

use crate::{CliConfig, Commands, OutputFormat};
use alloy_signer_local::PrivateKeySigner;
use eyre::{Result, WrapErr};
use gnfd_chain::{CancellationToken, HttpChainClient};
use std::io::Write;

/// Run one command, writing its result to `out`.
pub async fn execute(
    command: Commands,
    config: &CliConfig,
    format: OutputFormat,
    shutdown: &CancellationToken,
    out: &mut impl Write,
) -> Result<()> {
    let cancel = shutdown.child_token();
    let _guard = cancel.clone().drop_guard();

    match command {
        Commands::GetPrice(args) => price::run(&args, config, format, &cancel, out).await,
        Commands::BuyQuota(args) => buy_quota::run(&args, config, format, &cancel, out).await,
        Commands::QuotaInfo(args) => quota_info::run(&args, config, format, &cancel, out).await,
    }
}

fn chain_client(config: &CliConfig, signer: PrivateKeySigner) -> Result<HttpChainClient> {
    HttpChainClient::new(&config.chain, signer).wrap_err("Failed to build chain client")
}
