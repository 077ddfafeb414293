//! Version information for gnfd.

use std::sync::LazyLock;

/// The version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The git commit SHA, if provided at build time.
pub const GIT_SHA: &str = match option_env!("GNFD_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Version with build details, for `--version`.
pub static LONG_VERSION: LazyLock<String> =
    LazyLock::new(|| format!("Version: {VERSION}\nCommit SHA: {GIT_SHA}"));
