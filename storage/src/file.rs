//! JSON-file datastore.
//!
//! The whole store is one JSON document. Every call re-reads the file and
//! every write replaces it through a temporary file and a rename, so a
//! reader never sees a half-written document. Each write stages into its
//! own uniquely named temporary file. Nothing serializes two concurrent
//! writers: the last rename wins.

use async_trait::async_trait;
use errors::StorageError;
use nc_core::{DebuggingConfiguration, DebuggingConfigurationClient, IpamClient, IpamConfig};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::StoreDocument;

#[derive(Debug, Clone)]
pub struct FileDatastore {
    path: PathBuf
}

impl FileDatastore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: &std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string()
        }
    }

    /// `<path>.<uuid>.tmp`, next to the datastore so the rename stays on
    /// one filesystem.
    fn staging_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(format!(".{}.tmp", Uuid::new_v4()));
        PathBuf::from(tmp)
    }

    /// Read the document. A missing or empty file is an empty store.
    pub async fn load(&self) -> Result<StoreDocument, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "datastore file absent, treating as empty");
                return Ok(StoreDocument::default());
            }
            Err(e) => return Err(self.io_error(&e))
        };

        if contents.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        serde_json::from_str(&contents).map_err(|e| StorageError::Serialization {
            error_type: "StoreDocument".to_string(),
            reason: e.to_string()
        })
    }

    async fn save(&self, document: &StoreDocument) -> Result<(), StorageError> {
        let contents =
            serde_json::to_string_pretty(document).map_err(|e| StorageError::Serialization {
                error_type: "StoreDocument".to_string(),
                reason: e.to_string()
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(&e))?;
            }
        }

        let tmp = self.staging_path();
        let staged = match tokio::fs::write(&tmp, contents).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e)
        };
        if let Err(e) = staged {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(self.io_error(&e));
        }

        debug!(path = %self.path.display(), revision = document.revision, "datastore written");
        Ok(())
    }
}

#[async_trait]
impl DebuggingConfigurationClient for FileDatastore {
    async fn get(&self, name: &str) -> Result<DebuggingConfiguration, StorageError> {
        self.load().await?.get_debugging_configuration(name)
    }

    async fn create(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        let mut document = self.load().await?;
        let created = document.create_debugging_configuration(config)?;
        self.save(&document).await?;
        info!(
            name = %created.metadata.name,
            resource_version = %created.metadata.resource_version,
            "debugging configuration created"
        );
        Ok(created)
    }

    async fn update(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        let mut document = self.load().await?;
        let updated = document.update_debugging_configuration(config)?;
        self.save(&document).await?;
        info!(
            name = %updated.metadata.name,
            resource_version = %updated.metadata.resource_version,
            "debugging configuration updated"
        );
        Ok(updated)
    }
}

#[async_trait]
impl IpamClient for FileDatastore {
    async fn get_ipam_config(&self) -> Result<IpamConfig, StorageError> {
        Ok(self.load().await?.ipam_config())
    }

    async fn set_ipam_config(&self, config: IpamConfig) -> Result<(), StorageError> {
        let mut document = self.load().await?;
        document.set_ipam_config(config);
        self.save(&document).await
    }
}
