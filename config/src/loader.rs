//! # Connection Config Loader
//!
//! Resolves the connection configuration: file (or defaults), then
//! environment overrides, then validation.
//!
//! # Environment Variables
//! - `NETCTL_DATASTORE_TYPE`: `file` or `memory`
//! - `NETCTL_DATASTORE_PATH`: datastore file location
//! - `NETCTL_PRESERVE_CREATION_TIMESTAMP`: `true` or `false`

use crate::config::{ClientConfig, DEFAULT_CONFIG_PATH, DatastoreType};
use crate::file_loader::{ConfigFileError, load_from_file};
use std::env;
use std::path::Path;
use tracing::debug;
use validator::Validate;

pub const ENV_DATASTORE_TYPE: &str = "NETCTL_DATASTORE_TYPE";
pub const ENV_DATASTORE_PATH: &str = "NETCTL_DATASTORE_PATH";
pub const ENV_PRESERVE_CREATION_TIMESTAMP: &str = "NETCTL_PRESERVE_CREATION_TIMESTAMP";

/// Load and validate the connection configuration.
///
/// ## Usage
/// ```rust,no_run
/// use config::load_client_config;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = load_client_config(None)?;
///     println!("datastore: {}", config.spec.datastore_type);
///     Ok(())
/// }
/// ```
///
/// ## Behavior
/// - `Some(path)`: the file must exist and parse.
/// - `None`: [`DEFAULT_CONFIG_PATH`] is read if present, otherwise the
///   built-in defaults are used.
///
/// Environment overrides are applied on top in both cases.
pub fn load_client_config(path: Option<&Path>) -> Result<ClientConfig, ConfigFileError> {
    let base = match path {
        Some(path) => load_from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_from_file(default_path)?
            } else {
                debug!(path = DEFAULT_CONFIG_PATH, "no connection config, using defaults");
                ClientConfig::default()
            }
        }
    };

    let config = apply_env_overrides(base)?;
    config
        .validate()
        .map_err(|e| ConfigFileError::Invalid(e.to_string()))?;
    Ok(config)
}

/// Overlay `NETCTL_*` environment variables onto `config`.
///
/// Unset variables leave the corresponding field alone; set but unparsable
/// values are an error.
pub fn apply_env_overrides(mut config: ClientConfig) -> Result<ClientConfig, ConfigFileError> {
    if let Some(datastore_type) = parse_env::<DatastoreType>(ENV_DATASTORE_TYPE)? {
        config.spec.datastore_type = datastore_type;
    }
    if let Ok(path) = env::var(ENV_DATASTORE_PATH) {
        config.spec.datastore_path = path;
    }
    if let Some(preserve) = parse_env::<bool>(ENV_PRESERVE_CREATION_TIMESTAMP)? {
        config.spec.preserve_creation_timestamp = preserve;
    }
    Ok(config)
}

fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigFileError>
where
    T: std::str::FromStr
{
    match env::var(key) {
        Ok(s) => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigFileError::InvalidEnv {
                key: key.to_string(),
                value: s
            }),
        Err(_) => Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        unsafe {
            env::remove_var(ENV_DATASTORE_TYPE);
            env::remove_var(ENV_DATASTORE_PATH);
            env::remove_var(ENV_PRESERVE_CREATION_TIMESTAMP);
        }
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("netctl.yaml");
        fs::write(&path, "spec:\n  datastoreType: file\n  datastorePath: /a.json\n").unwrap();

        unsafe {
            env::set_var(ENV_DATASTORE_TYPE, "memory");
            env::set_var(ENV_PRESERVE_CREATION_TIMESTAMP, "true");
        }
        let config = load_client_config(Some(&path)).unwrap();
        clear_env();

        assert_eq!(config.spec.datastore_type, DatastoreType::Memory);
        assert_eq!(config.spec.datastore_path, "/a.json");
        assert!(config.spec.preserve_creation_timestamp);
    }

    #[test]
    #[serial]
    fn test_no_env_keeps_file_values() {
        clear_env();
        let config = apply_env_overrides(ClientConfig::default()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    #[serial]
    fn test_invalid_env_value() {
        clear_env();
        unsafe {
            env::set_var(ENV_PRESERVE_CREATION_TIMESTAMP, "sometimes");
        }
        let result = apply_env_overrides(ClientConfig::default());
        clear_env();

        match result {
            Err(ConfigFileError::InvalidEnv { key, value }) => {
                assert_eq!(key, ENV_PRESERVE_CREATION_TIMESTAMP);
                assert_eq!(value, "sometimes");
            }
            other => panic!("expected InvalidEnv, got {:?}", other)
        }
    }

    #[test]
    #[serial]
    fn test_empty_path_fails_validation() {
        clear_env();
        unsafe {
            env::set_var(ENV_DATASTORE_PATH, "");
        }
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("netctl.yaml");
        fs::write(&path, "").unwrap();

        let result = load_client_config(Some(&path));
        clear_env();
        assert!(matches!(result, Err(ConfigFileError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn test_explicit_missing_file_is_error() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let result = load_client_config(Some(&dir.path().join("missing.yaml")));
        assert!(matches!(result, Err(ConfigFileError::FileNotFound(_))));
    }
}
