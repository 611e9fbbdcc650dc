//! # netctl Commands
//!
//! Handlers behind the `ipam config` and `log-level` subcommands.
//!
//! Handlers receive their datastore client and component validator as trait
//! objects and return plain values; printing is left to the binary, with
//! helpers in [`table`].

pub mod ipam;
pub mod log_level;
pub mod table;

pub use log_level::LogLevelOptions;
