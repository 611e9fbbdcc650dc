use config::{ClientConfig, DatastoreType};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

pub fn unique_id(prefix: &str) -> String {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}", prefix, id)
}

/// A scratch directory holding a connection config that points at a file
/// datastore inside the same directory. Removed on drop.
pub struct FileStoreFixture {
    dir: TempDir,
    config_path: PathBuf,
    datastore_path: PathBuf
}

impl FileStoreFixture {
    pub fn new() -> std::io::Result<Self> {
        Self::with_options(false)
    }

    pub fn with_options(preserve_creation_timestamp: bool) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let datastore_path = dir.path().join(format!("{}.json", unique_id("datastore")));
        let config_path = dir.path().join("netctl.yaml");

        let mut config = ClientConfig::default();
        config.spec.datastore_type = DatastoreType::File;
        config.spec.datastore_path = datastore_path.display().to_string();
        config.spec.preserve_creation_timestamp = preserve_creation_timestamp;

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&config_path, yaml)?;

        Ok(Self {
            dir,
            config_path,
            datastore_path
        })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn datastore_path(&self) -> &Path {
        &self.datastore_path
    }

    /// Raw JSON of the datastore file, if it has been written.
    pub fn read_datastore(&self) -> Option<serde_json::Value> {
        let contents = std::fs::read_to_string(&self.datastore_path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}
