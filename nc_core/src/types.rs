use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Name of the singleton resources managed by netctl.
pub const DEFAULT_RESOURCE_NAME: &str = "default";

pub const MIN_BLOCK_SIZE: u8 = 1;
pub const MAX_BLOCK_SIZE: u8 = 8;
/// 6 bits, i.e. 64 addresses per affine block.
pub const DEFAULT_BLOCK_SIZE: u8 = 6;

/// Control-plane components whose log severity can be overridden.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString,
    Display, EnumIter,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase", ascii_case_insensitive)]
pub enum Component {
    Felix,
    Typha,
    Confd,
    Bird,
    Cni,
    KubeControllers,
    ApiServer
}

impl Component {
    /// Canonical names of every recognized component, in declaration order.
    pub fn names() -> Vec<String> {
        Self::iter().map(|c| c.to_string()).collect()
    }
}

/// Log severity that can be set for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum LogSeverity {
    Info,
    Debug
}

impl LogSeverity {
    const LOOKUP: &'static [(&'static str, LogSeverity)] =
        &[("info", LogSeverity::Info), ("debug", LogSeverity::Debug)];

    /// Case-insensitive lookup; anything outside the table is rejected.
    pub fn lookup(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::LOOKUP
            .iter()
            .find(|(key, _)| *key == lowered)
            .map(|(_, severity)| *severity)
    }
}

/// A single log-severity override.
///
/// An empty `node` applies to every node running the component. A
/// node-specific entry takes priority over the blanket entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfiguration {
    pub component: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub node: String,
    pub log_severity: LogSeverity
}

impl ComponentConfiguration {
    pub fn new(
        component: impl Into<String>,
        node: impl Into<String>,
        log_severity: LogSeverity,
    ) -> Self {
        Self {
            component: component.into(),
            node: node.into(),
            log_severity
        }
    }

    /// True when this entry is keyed by exactly (`component`, `node`).
    pub fn matches(&self, component: &str, node: &str) -> bool {
        self.component == component && self.node == node
    }
}

/// Persistence metadata of a stored object.
///
/// `resource_version` is an opaque token assigned by the datastore. Handlers
/// never interpret it: an empty token means the object has not been created
/// yet, anything else is forwarded verbatim on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String
}

impl ObjectMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the object this metadata came from exists in the store.
    pub fn exists(&self) -> bool {
        !self.resource_version.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebuggingConfigurationSpec {
    #[serde(default)]
    pub configuration: Vec<ComponentConfiguration>
}

/// The singleton document holding every component/node severity override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebuggingConfiguration {
    #[serde(default = "debugging_configuration_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: DebuggingConfigurationSpec
}

fn debugging_configuration_kind() -> String {
    DebuggingConfiguration::KIND.to_string()
}

impl DebuggingConfiguration {
    pub const KIND: &'static str = "DebuggingConfiguration";

    /// A document that has never been persisted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            metadata: ObjectMeta::named(name),
            spec: DebuggingConfigurationSpec::default()
        }
    }

    pub fn with_entries(mut self, entries: Vec<ComponentConfiguration>) -> Self {
        self.spec.configuration = entries;
        self
    }

    pub fn entries(&self) -> &[ComponentConfiguration] {
        &self.spec.configuration
    }
}

/// Settable IPAM parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum IpamConfigKey {
    #[strum(serialize = "blockSizeIPv4")]
    BlockSizeIpv4,
    #[strum(serialize = "blockSizeIPv6")]
    BlockSizeIpv6
}

impl IpamConfigKey {
    const LOOKUP: &'static [(&'static str, IpamConfigKey)] = &[
        ("blocksizeipv4", IpamConfigKey::BlockSizeIpv4),
        ("blocksizeipv6", IpamConfigKey::BlockSizeIpv6),
    ];

    /// Case-insensitive lookup; anything outside the table is rejected.
    pub fn lookup(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::LOOKUP
            .iter()
            .find(|(key, _)| *key == lowered)
            .map(|(_, key)| *key)
    }
}

/// Global IPAM settings.
///
/// Only the two block sizes are settable from the CLI; the remaining fields
/// are carried through unchanged whenever the object is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpamConfig {
    #[serde(rename = "blockSizeIPv4", default = "default_block_size")]
    pub block_size_ipv4: u8,
    #[serde(rename = "blockSizeIPv6", default = "default_block_size")]
    pub block_size_ipv6: u8,
    #[serde(default)]
    pub strict_affinity: bool,
    #[serde(default = "default_auto_allocate_blocks")]
    pub auto_allocate_blocks: bool
}

fn default_block_size() -> u8 {
    DEFAULT_BLOCK_SIZE
}

fn default_auto_allocate_blocks() -> bool {
    true
}

impl Default for IpamConfig {
    fn default() -> Self {
        Self {
            block_size_ipv4: DEFAULT_BLOCK_SIZE,
            block_size_ipv6: DEFAULT_BLOCK_SIZE,
            strict_affinity: false,
            auto_allocate_blocks: true
        }
    }
}

impl IpamConfig {
    pub fn get(&self, key: IpamConfigKey) -> u8 {
        match key {
            IpamConfigKey::BlockSizeIpv4 => self.block_size_ipv4,
            IpamConfigKey::BlockSizeIpv6 => self.block_size_ipv6
        }
    }

    pub fn set(&mut self, key: IpamConfigKey, value: u8) {
        match key {
            IpamConfigKey::BlockSizeIpv4 => self.block_size_ipv4 = value,
            IpamConfigKey::BlockSizeIpv6 => self.block_size_ipv6 = value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_component_parse_is_case_insensitive() {
        assert_eq!(Component::from_str("Felix").unwrap(), Component::Felix);
        assert_eq!(Component::from_str("felix").unwrap(), Component::Felix);
        assert_eq!(Component::from_str("FELIX").unwrap(), Component::Felix);
        assert_eq!(
            Component::from_str("kubecontrollers").unwrap(),
            Component::KubeControllers
        );
        assert!(Component::from_str("kube-controllers").is_err());
    }

    #[test]
    fn test_component_canonical_names() {
        assert_eq!(Component::Felix.to_string(), "Felix");
        assert_eq!(Component::KubeControllers.to_string(), "KubeControllers");
        assert_eq!(Component::ApiServer.to_string(), "ApiServer");
        assert_eq!(Component::names().len(), 7);
    }

    #[test]
    fn test_severity_lookup() {
        assert_eq!(LogSeverity::lookup("Info"), Some(LogSeverity::Info));
        assert_eq!(LogSeverity::lookup("DEBUG"), Some(LogSeverity::Debug));
        assert_eq!(LogSeverity::lookup("warning"), None);
        assert_eq!(LogSeverity::Debug.to_string(), "Debug");
    }

    #[test]
    fn test_ipam_key_lookup() {
        assert_eq!(
            IpamConfigKey::lookup("blockSizeIPv4"),
            Some(IpamConfigKey::BlockSizeIpv4)
        );
        assert_eq!(
            IpamConfigKey::lookup("BLOCKSIZEIPV6"),
            Some(IpamConfigKey::BlockSizeIpv6)
        );
        assert_eq!(IpamConfigKey::lookup("blockSize"), None);
        assert_eq!(IpamConfigKey::BlockSizeIpv6.to_string(), "blockSizeIPv6");
    }

    #[test]
    fn test_ipam_config_get_set() {
        let mut config = IpamConfig::default();
        assert_eq!(config.get(IpamConfigKey::BlockSizeIpv4), 6);

        config.set(IpamConfigKey::BlockSizeIpv4, 3);
        assert_eq!(config.block_size_ipv4, 3);
        assert_eq!(config.block_size_ipv6, 6);
        assert_eq!(config.get(IpamConfigKey::BlockSizeIpv4), 3);
    }

    #[test]
    fn test_ipam_config_wire_names() {
        let json = serde_json::to_value(IpamConfig::default()).unwrap();
        assert_eq!(json["blockSizeIPv4"], 6);
        assert_eq!(json["blockSizeIPv6"], 6);
        assert_eq!(json["autoAllocateBlocks"], true);

        let partial: IpamConfig = serde_json::from_str(r#"{"blockSizeIPv4": 4}"#).unwrap();
        assert_eq!(partial.block_size_ipv4, 4);
        assert_eq!(partial.block_size_ipv6, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn test_debugging_configuration_wire_shape() {
        let doc = DebuggingConfiguration::new(DEFAULT_RESOURCE_NAME).with_entries(vec![
            ComponentConfiguration::new("felix", "node1", LogSeverity::Debug),
            ComponentConfiguration::new("typha", "", LogSeverity::Info),
        ]);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["kind"], "DebuggingConfiguration");
        assert_eq!(json["metadata"]["name"], "default");
        assert!(json["metadata"].get("resourceVersion").is_none());
        assert_eq!(json["spec"]["configuration"][0]["logSeverity"], "Debug");
        assert_eq!(json["spec"]["configuration"][0]["node"], "node1");
        assert!(json["spec"]["configuration"][1].get("node").is_none());

        let back: DebuggingConfiguration = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_object_meta_exists() {
        let mut meta = ObjectMeta::named("default");
        assert!(!meta.exists());
        meta.resource_version = "1".to_string();
        assert!(meta.exists());
    }
}
