//! Output formatting utilities

use arbor_core::ViewRow;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Serialize a value as pretty JSON
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Display text for a node: its label when present, its URI otherwise
pub fn node_text(node: &arbor_core::GraphNode) -> &str {
    node.label.as_deref().unwrap_or(&node.uri)
}

/// Print projected view rows as an indented tree
pub fn print_rows(rows: &[ViewRow<'_>]) {
    for row in rows {
        let indent = "  ".repeat(row.depth);
        match &row.rel_to_parent {
            Some(predicate) => println!(
                "{}{} ({}) [{}]",
                indent,
                node_text(row.item),
                row.item.uri,
                predicate
            ),
            None => println!("{}{} ({})", indent, node_text(row.item), row.item.uri),
        }
    }
}
