//! # netctl Core
//!
//! Shared types, collaborator traits and the severity-list reconciler used by
//! the netctl command handlers.
//!
//! This crate provides:
//! - The persisted data model (`DebuggingConfiguration`, `IpamConfig`)
//! - Closed enums with case-insensitive lookup tables for every user-typed
//!   name (`Component`, `LogSeverity`, `IpamConfigKey`)
//! - Traits for the datastore clients and the component validator
//! - Pure reconciliation functions over the severity list

pub mod reconcile;
pub mod traits;
pub mod types;

#[cfg(test)]
mod proptests;

pub use traits::{ComponentValidator, DebuggingConfigurationClient, IpamClient, KnownComponents};
pub use types::{
    Component, ComponentConfiguration, DebuggingConfiguration, DebuggingConfigurationSpec,
    IpamConfig, IpamConfigKey, LogSeverity, ObjectMeta, DEFAULT_RESOURCE_NAME
};
