//! In-process datastore. Nothing survives the process.

use async_trait::async_trait;
use errors::StorageError;
use nc_core::{DebuggingConfiguration, DebuggingConfigurationClient, IpamClient, IpamConfig};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::document::StoreDocument;

#[derive(Debug, Clone, Default)]
pub struct MemoryDatastore {
    inner: Arc<RwLock<StoreDocument>>
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DebuggingConfigurationClient for MemoryDatastore {
    async fn get(&self, name: &str) -> Result<DebuggingConfiguration, StorageError> {
        debug!(name, "memory datastore get");
        self.inner.read().get_debugging_configuration(name)
    }

    async fn create(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        self.inner.write().create_debugging_configuration(config)
    }

    async fn update(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        self.inner.write().update_debugging_configuration(config)
    }
}

#[async_trait]
impl IpamClient for MemoryDatastore {
    async fn get_ipam_config(&self) -> Result<IpamConfig, StorageError> {
        Ok(self.inner.read().ipam_config())
    }

    async fn set_ipam_config(&self, config: IpamConfig) -> Result<(), StorageError> {
        self.inner.write().set_ipam_config(config);
        Ok(())
    }
}
