//! Collaborator traits injected into the command handlers.
//!
//! Handlers never reach for a process-wide client: the datastore and the
//! component validator are passed in, so tests can substitute fakes.

use async_trait::async_trait;
use errors::{CommandError, StorageError};
use std::str::FromStr;

use crate::types::{Component, DebuggingConfiguration, IpamConfig};

/// Access to the singleton `DebuggingConfiguration` resource.
#[async_trait]
pub trait DebuggingConfigurationClient: Send + Sync {
    /// Fetch a document by name. A missing document is reported as
    /// `StorageError::NotFound`.
    async fn get(&self, name: &str) -> Result<DebuggingConfiguration, StorageError>;

    /// Persist a document that does not exist yet.
    async fn create(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError>;

    /// Overwrite an existing document.
    async fn update(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError>;
}

/// Access to the global IPAM settings.
#[async_trait]
pub trait IpamClient: Send + Sync {
    async fn get_ipam_config(&self) -> Result<IpamConfig, StorageError>;

    /// Replace the whole IPAM object.
    async fn set_ipam_config(&self, config: IpamConfig) -> Result<(), StorageError>;
}

/// Decides whether a component name may carry a log-severity override.
pub trait ComponentValidator: Send + Sync {
    /// Returns the canonical component name, or
    /// `CommandError::InvalidComponent` carrying the message to show.
    fn validate(&self, component: &str) -> Result<String, CommandError>;
}

/// Validator backed by the built-in [`Component`] table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownComponents;

impl ComponentValidator for KnownComponents {
    fn validate(&self, component: &str) -> Result<String, CommandError> {
        Component::from_str(component)
            .map(|c| c.to_string())
            .map_err(|_| CommandError::InvalidComponent {
                message: format!(
                    "invalid component '{}': must be one of {}",
                    component,
                    Component::names().join(", ")
                )
            })
    }
}
