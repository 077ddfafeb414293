//! CLI commands for gnfd.
//!
//! This crate provides the command-line interface:
//! - [`Cli`] - Top-level CLI parser
//! - [`Commands`] - Available subcommands
//! - [`CliConfig`] - Resolved configuration
//!
//! Configuration is loaded using Figment with the following priority
//! (highest wins):
//!
//! 1. CLI arguments
//! 2. Config file (TOML)
//! 3. Environment variables (`GNFD_` prefix, `__` between sections)
//! 4. Defaults

mod cli;
pub mod commands;
pub mod config;
pub mod output;

pub use cli::{BuyQuotaArgs, Cli, Commands, GetPriceArgs, QuotaInfoArgs};
pub use config::CliConfig;
pub use output::OutputFormat;

use clap::Parser;
use color_eyre::eyre;
use gnfd_chain::CancellationToken;
use gnfd_cli_core::{dirs, logging, version};
use tracing::{debug, warn};

/// Run gnfd with the process's command line arguments.
///
/// This is the main entry point that should be called from the binary.
pub async fn run() -> eyre::Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(&cli.logs)?;
    debug!("gnfd {}", version::VERSION);

    let config_path = match &cli.config {
        Some(path) if !path.exists() => {
            eyre::bail!("Config file {} does not exist", path.display())
        }
        Some(path) => Some(path.clone()),
        None => dirs::default_config_file(),
    };
    let config = CliConfig::load(config_path.as_deref(), &cli.chain, &cli.wallet)?;
    debug!(path = ?config_path, rpc_addr = %config.chain.rpc_addr, "loaded configuration");

    let shutdown = CancellationToken::new();
    let interrupt = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling");
                shutdown.cancel();
            }
        }
    });

    let mut stdout = std::io::stdout().lock();
    let result = commands::execute(cli.command, &config, cli.output, &shutdown, &mut stdout).await;

    interrupt.abort();
    result
}
