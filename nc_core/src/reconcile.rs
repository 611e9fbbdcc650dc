//! Reconciliation of the component/node severity list.
//!
//! All functions are pure: they take the current entries and return the
//! list to persist. Callers validate component names and severities first.

use std::cmp::Ordering;

use crate::types::{ComponentConfiguration, LogSeverity};

/// Set the severity for (`component`, `node`).
///
/// A matching entry keeps its position and only has its severity replaced;
/// otherwise a new entry is appended.
pub fn upsert(
    entries: &[ComponentConfiguration],
    component: &str,
    node: &str,
    severity: LogSeverity,
) -> Vec<ComponentConfiguration> {
    let mut next = entries.to_vec();
    match next.iter_mut().find(|e| e.matches(component, node)) {
        Some(existing) => existing.log_severity = severity,
        None => next.push(ComponentConfiguration::new(component, node, severity))
    }
    next
}

/// Drop the entry keyed by exactly (`component`, `node`).
///
/// Unknown keys leave the list unchanged.
pub fn remove(
    entries: &[ComponentConfiguration],
    component: &str,
    node: &str,
) -> Vec<ComponentConfiguration> {
    entries
        .iter()
        .filter(|e| !e.matches(component, node))
        .cloned()
        .collect()
}

/// Display order: component ascending, then node-specific entries (by node
/// name) ahead of the blanket entry.
pub fn display_order(a: &ComponentConfiguration, b: &ComponentConfiguration) -> Ordering {
    a.component
        .cmp(&b.component)
        .then_with(|| match (a.node.is_empty(), b.node.is_empty()) {
            (false, false) => a.node.cmp(&b.node),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal
        })
}

/// Stable sort of `entries` by [`display_order`].
pub fn sort_for_display(entries: &[ComponentConfiguration]) -> Vec<ComponentConfiguration> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(display_order);
    sorted
}
