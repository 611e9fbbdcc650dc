//! # Storage Layer
//!
//! Local datastore backends for netctl (JSON file, in-memory).

pub mod document;
pub mod file;
pub mod memory;

pub use document::StoreDocument;
pub use file::FileDatastore;
pub use memory::MemoryDatastore;

use async_trait::async_trait;
use config::{ClientConfig, DatastoreType};
use errors::StorageError;
use nc_core::{DebuggingConfiguration, DebuggingConfigurationClient, IpamClient, IpamConfig};
use tracing::debug;

/// A connected datastore, selected by [`connect`].
#[derive(Debug, Clone)]
pub enum Datastore {
    File(FileDatastore),
    Memory(MemoryDatastore)
}

/// Open the backend named by the connection configuration.
pub fn connect(config: &ClientConfig) -> Result<Datastore, StorageError> {
    let spec = &config.spec;
    debug!(datastore_type = %spec.datastore_type, path = %spec.datastore_path, "connecting");
    match spec.datastore_type {
        DatastoreType::File => {
            if spec.datastore_path.trim().is_empty() {
                return Err(StorageError::Unsupported {
                    datastore_type: "file (no datastorePath)".to_string()
                });
            }
            Ok(Datastore::File(FileDatastore::new(&spec.datastore_path)))
        }
        DatastoreType::Memory => Ok(Datastore::Memory(MemoryDatastore::new()))
    }
}

#[async_trait]
impl DebuggingConfigurationClient for Datastore {
    async fn get(&self, name: &str) -> Result<DebuggingConfiguration, StorageError> {
        match self {
            Self::File(store) => store.get(name).await,
            Self::Memory(store) => store.get(name).await
        }
    }

    async fn create(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        match self {
            Self::File(store) => store.create(config).await,
            Self::Memory(store) => store.create(config).await
        }
    }

    async fn update(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        match self {
            Self::File(store) => store.update(config).await,
            Self::Memory(store) => store.update(config).await
        }
    }
}

#[async_trait]
impl IpamClient for Datastore {
    async fn get_ipam_config(&self) -> Result<IpamConfig, StorageError> {
        match self {
            Self::File(store) => store.get_ipam_config().await,
            Self::Memory(store) => store.get_ipam_config().await
        }
    }

    async fn set_ipam_config(&self, config: IpamConfig) -> Result<(), StorageError> {
        match self {
            Self::File(store) => store.set_ipam_config(config).await,
            Self::Memory(store) => store.set_ipam_config(config).await
        }
    }
}
