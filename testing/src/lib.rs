//! Shared test fixtures for the netctl workspace.
//!
//! - Fakes for the datastore clients and the component validator, with
//!   call recording and failure injection
//! - A temporary file-datastore fixture with a matching connection config
//!   for end-to-end tests of the binary

mod fakes;
mod fixtures;

pub use fakes::*;
pub use fixtures::*;
