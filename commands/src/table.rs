//! Plain-text table and JSON rendering for command output.

use nc_core::{ComponentConfiguration, IpamConfigKey};
use serde::Serialize;

pub const LOG_LEVEL_HEADERS: [&str; 3] = ["COMPONENT", "NODE", "LOG LEVEL"];
pub const IPAM_HEADERS: [&str; 2] = ["NAME", "VALUE"];

/// Render a boxed table:
///
/// ```text
/// +-----------+------+-----------+
/// | COMPONENT | NODE | LOG LEVEL |
/// +-----------+------+-----------+
/// | FELIX     |      | Debug     |
/// +-----------+------+-----------+
/// ```
///
/// Rows shorter than the header are padded with empty cells.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[&str]| {
        let mut line = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            let pad = w - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(border.clone());
    out.push(format_row(headers));
    out.push(border.clone());
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(format_row(&cells));
    }
    if !rows.is_empty() {
        out.push(border);
    }

    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

/// Table cells for log-level entries. The component column is upper-cased.
pub fn log_level_rows(entries: &[ComponentConfiguration]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            vec![
                e.component.to_uppercase(),
                e.node.clone(),
                e.log_severity.to_string(),
            ]
        })
        .collect()
}

pub fn render_log_levels(entries: &[ComponentConfiguration]) -> String {
    render_table(&LOG_LEVEL_HEADERS, &log_level_rows(entries))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogLevelRow<'a> {
    component: &'a str,
    node: &'a str,
    log_level: String
}

/// JSON array of `{component, node, logLevel}` objects, same order as the
/// table. Components keep their canonical spelling.
pub fn render_log_levels_json(
    entries: &[ComponentConfiguration],
) -> Result<String, serde_json::Error> {
    let rows: Vec<LogLevelRow<'_>> = entries
        .iter()
        .map(|e| LogLevelRow {
            component: &e.component,
            node: &e.node,
            log_level: e.log_severity.to_string()
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

pub fn render_ipam(settings: &[(IpamConfigKey, u8)]) -> String {
    let rows: Vec<Vec<String>> = settings
        .iter()
        .map(|(key, value)| vec![key.to_string(), value.to_string()])
        .collect();
    render_table(&IPAM_HEADERS, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nc_core::LogSeverity;

    #[test]
    fn test_render_table_layout() {
        let rendered = render_table(
            &["A", "LONG HEADER"],
            &[vec!["wide cell".to_string(), "x".to_string()]]
        );
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+-----------+-------------+");
        assert_eq!(lines[1], "| A         | LONG HEADER |");
        assert_eq!(lines[3], "| wide cell | x           |");
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let rendered = render_log_levels(&[]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("COMPONENT"));
        assert!(lines[1].contains("LOG LEVEL"));
    }

    #[test]
    fn test_log_level_rows_upper_case_component() {
        let rows = log_level_rows(&[ComponentConfiguration::new(
            "KubeControllers",
            "node1",
            LogSeverity::Info
        )]);
        assert_eq!(rows, vec![vec!["KUBECONTROLLERS", "node1", "Info"]]);
    }

    #[test]
    fn test_json_rows() {
        let json = render_log_levels_json(&[ComponentConfiguration::new(
            "Felix",
            "",
            LogSeverity::Debug
        )])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["component"], "Felix");
        assert_eq!(value[0]["node"], "");
        assert_eq!(value[0]["logLevel"], "Debug");
    }

    #[test]
    fn test_render_ipam() {
        let rendered = render_ipam(&[
            (IpamConfigKey::BlockSizeIpv4, 6),
            (IpamConfigKey::BlockSizeIpv6, 4),
        ]);
        assert!(rendered.contains("| blockSizeIPv4 | 6     |"));
        assert!(rendered.contains("| blockSizeIPv6 | 4     |"));
    }
}
