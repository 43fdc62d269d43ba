//! The `plain` formatter: one sentence per changed property.
//!
//! Properties are addressed by the dotted path of their ancestor keys.
//! Unchanged entries are omitted and nested entries contribute only through
//! their children.

use gendiff_diff::DiffNode;
use serde_json::Value;

/// Render a diff as plain sentences joined by newlines.
pub fn render(diff: &[DiffNode]) -> String {
    render_level(diff, "").join("\n")
}

fn render_level(nodes: &[DiffNode], parent: &str) -> Vec<String> {
    let mut sorted: Vec<&DiffNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.key().cmp(b.key()));

    sorted
        .into_iter()
        .flat_map(|node| render_node(node, parent))
        .collect()
}

fn render_node(node: &DiffNode, parent: &str) -> Vec<String> {
    let path = if parent.is_empty() {
        node.key().to_string()
    } else {
        format!("{parent}.{}", node.key())
    };

    match node {
        DiffNode::Added { value, .. } => vec![format!(
            "Property '{path}' was added with value: {}",
            render_value(value)
        )],
        DiffNode::Removed { .. } => vec![format!("Property '{path}' was removed")],
        DiffNode::Updated {
            old_value,
            new_value,
            ..
        } => vec![format!(
            "Property '{path}' was updated. From {} to {}",
            render_value(old_value),
            render_value(new_value)
        )],
        DiffNode::Unchanged { .. } => Vec::new(),
        DiffNode::Nested { children, .. } => render_level(children, &path),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Object(_) | Value::Array(_) => "[complex value]".to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}
