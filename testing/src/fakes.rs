//! In-memory fakes for the collaborator traits.
//!
//! Each fake records what the handler asked of it and can be told to fail
//! a specific call.

use async_trait::async_trait;
use chrono::Utc;
use errors::{CommandError, StorageError};
use nc_core::{
    ComponentValidator, DebuggingConfiguration, DebuggingConfigurationClient, IpamClient,
    IpamConfig,
};
use parking_lot::Mutex;
use std::collections::HashSet;

/// Which call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailOn {
    Get,
    Create,
    Update,
    GetIpam,
    SetIpam
}

fn injected(what: FailOn) -> StorageError {
    StorageError::Io {
        path: "mock".to_string(),
        reason: format!("injected {:?} failure", what)
    }
}

/// A write the handler issued, as it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Create(DebuggingConfiguration),
    Update(DebuggingConfiguration)
}

impl Write {
    pub fn document(&self) -> &DebuggingConfiguration {
        match self {
            Self::Create(doc) | Self::Update(doc) => doc
        }
    }
}

#[derive(Debug, Default)]
struct DebugState {
    stored: Option<DebuggingConfiguration>,
    revision: u64,
    gets: usize,
    writes: Vec<Write>,
    failures: HashSet<FailOn>
}

/// Fake `DebuggingConfigurationClient` holding at most one document.
#[derive(Debug, Default)]
pub struct MockDebuggingClient {
    state: Mutex<DebugState>
}

impl MockDebuggingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `doc` already stored at version "1".
    pub fn with_document(mut doc: DebuggingConfiguration) -> Self {
        doc.metadata.resource_version = "1".to_string();
        if doc.metadata.creation_timestamp.is_none() {
            doc.metadata.creation_timestamp = Some(Utc::now());
        }
        let mock = Self::default();
        {
            let mut state = mock.state.lock();
            state.stored = Some(doc);
            state.revision = 1;
        }
        mock
    }

    pub fn fail_on(self, what: FailOn) -> Self {
        self.state.lock().failures.insert(what);
        self
    }

    pub fn stored(&self) -> Option<DebuggingConfiguration> {
        self.state.lock().stored.clone()
    }

    pub fn writes(&self) -> Vec<Write> {
        self.state.lock().writes.clone()
    }

    pub fn get_count(&self) -> usize {
        self.state.lock().gets
    }
}

#[async_trait]
impl DebuggingConfigurationClient for MockDebuggingClient {
    async fn get(&self, name: &str) -> Result<DebuggingConfiguration, StorageError> {
        let mut state = self.state.lock();
        state.gets += 1;
        if state.failures.contains(&FailOn::Get) {
            return Err(injected(FailOn::Get));
        }
        state
            .stored
            .clone()
            .filter(|doc| doc.metadata.name == name)
            .ok_or_else(|| StorageError::not_found(DebuggingConfiguration::KIND, name))
    }

    async fn create(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        let mut state = self.state.lock();
        state.writes.push(Write::Create(config.clone()));
        if state.failures.contains(&FailOn::Create) {
            return Err(injected(FailOn::Create));
        }
        if state.stored.is_some() {
            return Err(StorageError::already_exists(
                DebuggingConfiguration::KIND,
                config.metadata.name
            ));
        }

        let mut created = config;
        state.revision += 1;
        created.metadata.resource_version = state.revision.to_string();
        if created.metadata.creation_timestamp.is_none() {
            created.metadata.creation_timestamp = Some(Utc::now());
        }
        state.stored = Some(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        config: DebuggingConfiguration,
    ) -> Result<DebuggingConfiguration, StorageError> {
        let mut state = self.state.lock();
        state.writes.push(Write::Update(config.clone()));
        if state.failures.contains(&FailOn::Update) {
            return Err(injected(FailOn::Update));
        }
        if state.stored.is_none() {
            return Err(StorageError::not_found(
                DebuggingConfiguration::KIND,
                config.metadata.name
            ));
        }

        let mut updated = config;
        state.revision += 1;
        updated.metadata.resource_version = state.revision.to_string();
        state.stored = Some(updated.clone());
        Ok(updated)
    }
}

#[derive(Debug, Default)]
struct IpamState {
    config: IpamConfig,
    writes: Vec<IpamConfig>,
    failures: HashSet<FailOn>
}

/// Fake `IpamClient` starting from the default settings.
#[derive(Debug, Default)]
pub struct MockIpamClient {
    state: Mutex<IpamState>
}

impl MockIpamClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IpamConfig) -> Self {
        let mock = Self::default();
        mock.state.lock().config = config;
        mock
    }

    pub fn fail_on(self, what: FailOn) -> Self {
        self.state.lock().failures.insert(what);
        self
    }

    pub fn config(&self) -> IpamConfig {
        self.state.lock().config
    }

    pub fn writes(&self) -> Vec<IpamConfig> {
        self.state.lock().writes.clone()
    }
}

#[async_trait]
impl IpamClient for MockIpamClient {
    async fn get_ipam_config(&self) -> Result<IpamConfig, StorageError> {
        let state = self.state.lock();
        if state.failures.contains(&FailOn::GetIpam) {
            return Err(injected(FailOn::GetIpam));
        }
        Ok(state.config)
    }

    async fn set_ipam_config(&self, config: IpamConfig) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        state.writes.push(config);
        if state.failures.contains(&FailOn::SetIpam) {
            return Err(injected(FailOn::SetIpam));
        }
        state.config = config;
        Ok(())
    }
}

/// Validator accepting a fixed set of names, returned unchanged.
#[derive(Debug, Clone)]
pub struct MockComponentValidator {
    accepted: Vec<String>
}

impl MockComponentValidator {
    pub fn accepting(names: &[&str]) -> Self {
        Self {
            accepted: names.iter().map(|n| n.to_string()).collect()
        }
    }
}

impl ComponentValidator for MockComponentValidator {
    fn validate(&self, component: &str) -> Result<String, CommandError> {
        if self.accepted.iter().any(|n| n == component) {
            Ok(component.to_string())
        } else {
            Err(CommandError::InvalidComponent {
                message: format!("mock rejected component '{}'", component)
            })
        }
    }
}
