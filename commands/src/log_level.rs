//! `log-level` handlers.
//!
//! All three operate on the singleton `default` DebuggingConfiguration.
//! A missing document is the empty state: the first `set` or `unset`
//! creates it, later ones update it. Updates carry the fetched resource
//! version back unchanged and the store does not compare it, so two racing
//! invocations can lose an update.

use chrono::Utc;
use errors::CommandError;
use nc_core::reconcile::{remove, sort_for_display, upsert};
use nc_core::{
    ComponentConfiguration, ComponentValidator, DEFAULT_RESOURCE_NAME, DebuggingConfiguration,
    DebuggingConfigurationClient, LogSeverity, ObjectMeta,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLevelOptions {
    /// Keep the stored creation timestamp on update instead of stamping the
    /// current time.
    pub preserve_creation_timestamp: bool
}

/// Parse a severity name, case-insensitively.
pub fn parse_severity(value: &str) -> Result<LogSeverity, CommandError> {
    LogSeverity::lookup(value).ok_or_else(|| CommandError::unrecognized("log severity", value))
}

/// Current entries in display order, plus the metadata of the stored
/// document. A missing document yields no entries and empty metadata.
async fn fetch(
    client: &dyn DebuggingConfigurationClient,
) -> Result<(Vec<ComponentConfiguration>, ObjectMeta), CommandError> {
    match client.get(DEFAULT_RESOURCE_NAME).await {
        Ok(doc) => {
            debug!(
                entries = doc.entries().len(),
                resource_version = %doc.metadata.resource_version,
                "fetched debugging configuration"
            );
            Ok((sort_for_display(doc.entries()), doc.metadata))
        }
        Err(e) if e.is_not_found() => {
            debug!("no debugging configuration stored yet");
            Ok((Vec::new(), ObjectMeta::default()))
        }
        Err(e) => Err(CommandError::store(
            "failed to get debugging configuration",
            e
        ))
    }
}

async fn persist(
    client: &dyn DebuggingConfigurationClient,
    meta: ObjectMeta,
    entries: Vec<ComponentConfiguration>,
    options: LogLevelOptions,
) -> Result<DebuggingConfiguration, CommandError> {
    let mut doc = DebuggingConfiguration::new(DEFAULT_RESOURCE_NAME).with_entries(entries);

    if !meta.exists() {
        let created = client
            .create(doc)
            .await
            .map_err(|e| CommandError::store("failed to create debugging configuration", e))?;
        info!(
            resource_version = %created.metadata.resource_version,
            "debugging configuration created"
        );
        return Ok(created);
    }

    doc.metadata = meta;
    if !options.preserve_creation_timestamp {
        doc.metadata.creation_timestamp = Some(Utc::now());
    }
    let updated = client
        .update(doc)
        .await
        .map_err(|e| CommandError::store("failed to update debugging configuration", e))?;
    info!(
        resource_version = %updated.metadata.resource_version,
        "debugging configuration updated"
    );
    Ok(updated)
}

/// Set the severity of `component` on `node` (empty for every node).
pub async fn set(
    client: &dyn DebuggingConfigurationClient,
    validator: &dyn ComponentValidator,
    component: &str,
    node: &str,
    severity: &str,
    options: LogLevelOptions,
) -> Result<DebuggingConfiguration, CommandError> {
    let component = validator.validate(component)?;
    let severity = parse_severity(severity)?;

    let (entries, meta) = fetch(client).await?;
    let entries = upsert(&entries, &component, node, severity);
    persist(client, meta, entries, options).await
}

/// Remove the override keyed by exactly (`component`, `node`).
///
/// The document is written back even when nothing matched.
pub async fn unset(
    client: &dyn DebuggingConfigurationClient,
    validator: &dyn ComponentValidator,
    component: &str,
    node: &str,
    options: LogLevelOptions,
) -> Result<DebuggingConfiguration, CommandError> {
    let component = validator.validate(component)?;

    let (entries, meta) = fetch(client).await?;
    let entries = remove(&entries, &component, node);
    persist(client, meta, entries, options).await
}

/// Entries in display order, optionally restricted to one component.
pub async fn show(
    client: &dyn DebuggingConfigurationClient,
    validator: &dyn ComponentValidator,
    component: Option<&str>,
) -> Result<Vec<ComponentConfiguration>, CommandError> {
    let filter = component.map(|c| validator.validate(c)).transpose()?;

    let (entries, _) = fetch(client).await?;
    Ok(match filter {
        Some(filter) => entries
            .into_iter()
            .filter(|e| e.component == filter)
            .collect(),
        None => entries
    })
}
