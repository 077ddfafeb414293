//! CLI argument assembly and top-level parser.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::OutputFormat;
use gnfd_chain::ChainArgs;
use gnfd_cli_core::{
    args::{LogArgs, WalletArgs},
    version,
};

/// gnfd - read quota pricing and purchase for storage buckets
#[derive(Debug, Parser)]
#[command(
    name = "gnfd",
    author,
    version = version::VERSION,
    long_version = version::LONG_VERSION.as_str(),
    about,
    long_about = None
)]
pub struct Cli {
    /// Logging configuration.
    #[command(flatten)]
    pub logs: LogArgs,

    /// Path to the TOML configuration file.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Chain endpoint configuration.
    #[command(flatten)]
    pub chain: ChainArgs,

    /// Account key configuration.
    #[command(flatten)]
    pub wallet: WalletArgs,

    /// Result output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Payment commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get the read quota and storage price of a storage provider.
    GetPrice(GetPriceArgs),

    /// Set the charged read quota of a bucket.
    ///
    /// The quota is a target total, not an increment.
    BuyQuota(BuyQuotaArgs),

    /// Show the charged, free and consumed read quota of a bucket.
    QuotaInfo(QuotaInfoArgs),
}

/// Arguments for the 'get-price' command.
#[derive(Debug, Args)]
pub struct GetPriceArgs {
    /// Storage provider operator address.
    #[arg(long = "sp-address", alias = "spAddress", value_name = "ADDRESS")]
    pub sp_address: Option<String>,
}

/// Arguments for the 'buy-quota' command.
#[derive(Debug, Args)]
pub struct BuyQuotaArgs {
    /// Target charged read quota in bytes.
    #[arg(
        long = "charged-quota",
        alias = "chargedQuota",
        value_name = "BYTES",
        default_value_t = 0
    )]
    pub charged_quota: u64,

    /// Exit with an error status when the chain rejects the purchase.
    #[arg(long)]
    pub fail_on_reject: bool,

    /// Bucket locator, e.g. gnfd://my-bucket.
    #[arg(value_name = "BUCKET-URL")]
    pub bucket_url: String,
}

/// Arguments for the 'quota-info' command.
#[derive(Debug, Args)]
pub struct QuotaInfoArgs {
    /// Bucket locator, e.g. gnfd://my-bucket.
    #[arg(value_name = "BUCKET-URL")]
    pub bucket_url: String,
}
