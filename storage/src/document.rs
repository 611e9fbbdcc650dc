//! The persisted datastore document.
//!
//! Both backends hold one of these; the file backend round-trips it through
//! JSON on every call, the memory backend keeps it behind a lock.

use chrono::Utc;
use errors::StorageError;
use nc_core::{DebuggingConfiguration, IpamConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    /// Last resource version handed out. Versions are unique across kinds.
    #[serde(default)]
    pub revision: u64,

    #[serde(default)]
    pub debugging_configurations: BTreeMap<String, DebuggingConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipam_config: Option<IpamConfig>
}

impl StoreDocument {
    fn next_version(&mut self) -> String {
        self.revision += 1;
        self.revision.to_string()
    }

    pub fn get_debugging_configuration(
        &self,
        name: &str,
    ) -> Result<DebuggingConfiguration, StorageError> {
        self.debugging_configurations
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::not_found(DebuggingConfiguration::KIND, name))
    }

    /// Insert a new document, assigning version, uid and creation timestamp.
    pub fn create_debugging_configuration(
        &mut self,
        mut config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        let name = config.metadata.name.clone();
        if self.debugging_configurations.contains_key(&name) {
            return Err(StorageError::already_exists(
                DebuggingConfiguration::KIND,
                name
            ));
        }

        config.metadata.resource_version = self.next_version();
        config.metadata.uid = Uuid::new_v4().to_string();
        if config.metadata.creation_timestamp.is_none() {
            config.metadata.creation_timestamp = Some(Utc::now());
        }

        self.debugging_configurations
            .insert(name, config.clone());
        Ok(config)
    }

    /// Overwrite an existing document.
    ///
    /// The incoming resource version is not compared with the stored one:
    /// the last writer wins. The uid is kept from the stored copy when the
    /// caller did not supply one.
    pub fn update_debugging_configuration(
        &mut self,
        mut config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        let name = config.metadata.name.clone();
        let existing_uid = match self.debugging_configurations.get(&name) {
            Some(existing) => existing.metadata.uid.clone(),
            None => {
                return Err(StorageError::not_found(
                    DebuggingConfiguration::KIND,
                    name
                ));
            }
        };

        config.metadata.resource_version = self.next_version();
        if config.metadata.uid.is_empty() {
            config.metadata.uid = existing_uid;
        }

        self.debugging_configurations
            .insert(name, config.clone());
        Ok(config)
    }

    /// The stored IPAM settings, or the defaults if none were ever written.
    pub fn ipam_config(&self) -> IpamConfig {
        self.ipam_config.unwrap_or_default()
    }

    pub fn set_ipam_config(&mut self, config: IpamConfig) {
        self.next_version();
        self.ipam_config = Some(config);
    }
}
