//! Account key arguments.

use alloy_signer_local::PrivateKeySigner;
use clap::Args;
use eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

/// Where the account's signing key comes from.
#[derive(Debug, Clone, Default, Args, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Wallet")]
#[serde(default)]
pub struct WalletArgs {
    /// The raw private key as a hex string.
    #[arg(long, value_name = "PRIVATE_KEY", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    /// The path to a JSON keystore file.
    #[arg(long, value_name = "PATH", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keystore_file: Option<PathBuf>,

    /// The password to unlock the keystore file.
    #[arg(long, value_name = "PASSWORD", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// A file containing the keystore password.
    #[arg(long, value_name = "PATH", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
}

impl WalletArgs {
    /// Whether any key source is configured.
    pub fn is_configured(&self) -> bool {
        self.private_key.is_some() || self.keystore_file.is_some()
    }

    /// Load the account signer.
    ///
    /// A raw private key wins over a keystore file.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        if let Some(private_key) = &self.private_key {
            return PrivateKeySigner::from_str(private_key.trim())
                .wrap_err("Invalid private key");
        }

        if let Some(keystore_file) = &self.keystore_file {
            let password =
                resolve_password(self.password.as_deref(), self.password_file.as_deref())?;
            return load_signer_from_keystore(keystore_file, &password);
        }

        Err(eyre!(
            "No account key configured. Use --private-key or --keystore-file"
        ))
    }
}

/// Load a signer from an Ethereum keystore file.
fn load_signer_from_keystore(keystore_path: &Path, password: &str) -> Result<PrivateKeySigner> {
    debug!("Loading signing key from keystore: {}", keystore_path.display());
    PrivateKeySigner::decrypt_keystore(keystore_path, password)
        .wrap_err_with(|| format!("Failed to decrypt keystore at {}", keystore_path.display()))
}

/// Resolve the keystore password.
///
/// Priority: CLI argument > password file > interactive prompt
pub fn resolve_password(password: Option<&str>, password_file: Option<&Path>) -> Result<String> {
    if let Some(pwd) = password {
        return Ok(pwd.to_string());
    }

    if let Some(path) = password_file {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read password file {}", path.display()))?;
        return Ok(content.trim().to_string());
    }

    if atty::is(atty::Stream::Stdin) {
        return rpassword::prompt_password("Enter keystore password: ")
            .wrap_err("Failed to read password from terminal");
    }

    Err(eyre!(
        "No password provided. Use --password, --password-file, or GNFD_WALLET__PASSWORD"
    ))
}
