//! Figment-based configuration loading.
//!
//! Configuration priority (highest wins):
//! 1. CLI arguments
//! 2. Config file (TOML)
//! 3. Environment variables (`GNFD_` prefix)
//! 4. Defaults

use eyre::{Result, WrapErr};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gnfd_chain::{ChainArgs, ChainConfig};
use gnfd_cli_core::args::WalletArgs;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `GNFD_CHAIN__RPC_ADDR`.
pub const ENV_PREFIX: &str = "GNFD_";

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Chain and storage provider endpoints.
    pub chain: ChainConfig,

    /// Account key source.
    pub wallet: WalletArgs,
}

/// Command line values layered over everything else.
///
/// Unset flags serialize to nothing and leave lower layers intact.
#[derive(Serialize)]
struct CliOverrides<'a> {
    chain: &'a ChainArgs,
    wallet: &'a WalletArgs,
}

impl CliConfig {
    /// Load configuration from defaults, environment, config file and flags.
    ///
    /// A config path that does not exist is skipped.
    pub fn load(
        config_path: Option<&Path>,
        chain: &ChainArgs,
        wallet: &WalletArgs,
    ) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(CliConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
            .merge(Serialized::globals(CliOverrides { chain, wallet }))
            .extract()
            .wrap_err("Failed to load configuration")
    }
}
