//! # Connection Configuration Structures
//!
//! The connection configuration tells netctl which datastore to talk to.
//!
//! All configuration structures:
//! - Use `serde` for serialization/deserialization (camelCase on the wire)
//! - Use `validator` for input validation

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Path used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/netctl/netctl.cfg";

/// Datastore file used when the `file` backend is selected without a path.
pub const DEFAULT_DATASTORE_PATH: &str = "/var/lib/netctl/datastore.json";

/// Top-level connection configuration document.
///
/// ## Usage
/// ```rust,no_run
/// use config::ClientConfig;
///
/// let config = ClientConfig::default();
/// println!("datastore: {}", config.spec.datastore_type);
/// ```
///
/// ## Example (YAML)
/// ```yaml
/// apiVersion: netctl/v1
/// kind: ClientConfig
/// spec:
///   datastoreType: file
///   datastorePath: /var/lib/netctl/datastore.json
///   preserveCreationTimestamp: false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_kind")]
    #[validate(custom(function = "validate_kind"))]
    pub kind: String,

    #[serde(default)]
    #[validate(nested)]
    pub spec: ClientConfigSpec
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            spec: ClientConfigSpec::default()
        }
    }
}

fn default_api_version() -> String {
    "netctl/v1".to_string()
}

fn default_kind() -> String {
    "ClientConfig".to_string()
}

fn validate_kind(value: &str) -> Result<(), validator::ValidationError> {
    if value == "ClientConfig" {
        Ok(())
    } else {
        Err(validator::ValidationError::new("kind must be ClientConfig"))
    }
}

/// Supported datastore backends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DatastoreType {
    /// A JSON document on local disk.
    #[default]
    File,
    /// Process-local maps; nothing survives the invocation.
    Memory
}

/// Datastore selection and handler options.
///
/// ## Fields
/// - `datastore_type`: `file` (default) or `memory`
/// - `datastore_path`: location of the datastore file, required for `file`
/// - `preserve_creation_timestamp`: keep the stored creation timestamp of
///   the debugging configuration on update instead of refreshing it
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_datastore_path"))]
pub struct ClientConfigSpec {
    #[serde(default)]
    pub datastore_type: DatastoreType,

    #[serde(default = "default_datastore_path")]
    #[validate(length(max = 4096))]
    pub datastore_path: String,

    #[serde(default)]
    pub preserve_creation_timestamp: bool
}

fn default_datastore_path() -> String {
    DEFAULT_DATASTORE_PATH.to_string()
}

fn validate_datastore_path(spec: &ClientConfigSpec) -> Result<(), validator::ValidationError> {
    if spec.datastore_type == DatastoreType::File && spec.datastore_path.trim().is_empty() {
        return Err(validator::ValidationError::new(
            "datastorePath is required for the file datastore"
        ));
    }
    Ok(())
}

impl Default for ClientConfigSpec {
    fn default() -> Self {
        Self {
            datastore_type: DatastoreType::default(),
            datastore_path: default_datastore_path(),
            preserve_creation_timestamp: false
        }
    }
}
