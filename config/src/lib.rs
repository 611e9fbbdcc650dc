//! # Connection Configuration
//!
//! Tells netctl where its datastore lives.
//!
//! This crate provides:
//! - The `ClientConfig` document and its validation
//! - Configuration file loading (YAML/JSON/TOML)
//! - `NETCTL_*` environment overrides

pub mod config;
pub mod file_loader;
pub mod loader;

pub use config::{
    ClientConfig, ClientConfigSpec, DEFAULT_CONFIG_PATH, DEFAULT_DATASTORE_PATH, DatastoreType,
};
pub use file_loader::{
    ConfigFileError, load_from_file, load_from_json, load_from_toml, load_from_yaml,
};
pub use loader::{apply_env_overrides, load_client_config};
pub use validator::Validate;
