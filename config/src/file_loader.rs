//! # Configuration File Loading
//!
//! Loads the connection configuration from YAML, JSON or TOML files.
//!
//! The format is picked from the file extension. Files ending in `.cfg` or
//! carrying no extension at all are read as YAML.

use crate::config::ClientConfig;
use std::path::Path;
use tracing::debug;

/// Configuration file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("config file not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("failed to parse JSON: {0}")]
    JsonParse(String),

    #[error("unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },

    #[error("invalid connection config: {0}")]
    Invalid(String)
}

fn read(path: &Path) -> Result<String, ConfigFileError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigFileError::FileNotFound(path.display().to_string()),
        _ => ConfigFileError::Io(e)
    })
}

/// Load the connection configuration from a TOML file.
///
/// ## Error Handling
/// Returns `ConfigFileError` for:
/// - File not found
/// - Invalid TOML syntax
pub fn load_from_toml(path: &Path) -> Result<ClientConfig, ConfigFileError> {
    let contents = read(path)?;
    toml::from_str(&contents).map_err(|e| ConfigFileError::TomlParse(e.to_string()))
}

/// Load the connection configuration from a YAML file.
///
/// ## Usage
/// ```rust,no_run
/// use config::load_from_yaml;
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = load_from_yaml(Path::new("/etc/netctl/netctl.cfg"))?;
///     println!("datastore: {}", config.spec.datastore_type);
///     Ok(())
/// }
/// ```
pub fn load_from_yaml(path: &Path) -> Result<ClientConfig, ConfigFileError> {
    let contents = read(path)?;
    // An empty document is a config with every field defaulted.
    if contents.trim().is_empty() {
        return Ok(ClientConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigFileError::YamlParse(e.to_string()))
}

pub fn load_from_json(path: &Path) -> Result<ClientConfig, ConfigFileError> {
    let contents = read(path)?;
    serde_json::from_str(&contents).map_err(|e| ConfigFileError::JsonParse(e.to_string()))
}

/// Load the connection configuration with format auto-detection.
///
/// ## Supported Formats
/// - `.toml`: TOML
/// - `.json`: JSON
/// - `.yaml`, `.yml`, `.cfg` or no extension: YAML
pub fn load_from_file(path: &Path) -> Result<ClientConfig, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase);

    debug!(path = %path.display(), "loading connection config");

    match extension.as_deref() {
        Some("toml") => load_from_toml(path),
        Some("json") => load_from_json(path),
        Some("yaml") | Some("yml") | Some("cfg") | None => load_from_yaml(path),
        Some(other) => Err(ConfigFileError::UnsupportedFormat(other.to_string()))
    }
}
