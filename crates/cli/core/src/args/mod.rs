//! Argument groups shared by every command.
//!
//! These structs double as configuration sections: they parse from the
//! command line with clap and serialize into the figment layers with serde.

mod log;
mod wallet;

pub use log::LogArgs;
pub use wallet::{WalletArgs, resolve_password};
