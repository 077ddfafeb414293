//! Shared CLI infrastructure for gnfd.
//!
//! - [`args`] - argument groups shared by every command (logging, wallet)
//! - [`dirs`] - default file locations
//! - [`logging`] - tracing subscriber setup
//! - [`version`] - version strings

pub mod args;
pub mod dirs;
pub mod logging;
pub mod version;
