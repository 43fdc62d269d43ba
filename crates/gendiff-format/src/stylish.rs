//! The `stylish` formatter: an indented, brace-delimited rendering.
//!
//! Each nesting level indents by four columns. Change markers (`+`, `-`, or a
//! blank for unchanged entries) sit in the two columns immediately before the
//! key. Untouched structured values are printed with the same indentation
//! rule but without markers.

use gendiff_diff::DiffNode;
use serde_json::Value;

const INDENT_WIDTH: usize = 4;
const MARKER_WIDTH: usize = 2;

/// Render a diff as stylish text.
pub fn render(diff: &[DiffNode]) -> String {
    render_level(diff, 0)
}

fn render_level(nodes: &[DiffNode], depth: usize) -> String {
    let lines: Vec<String> = nodes
        .iter()
        .flat_map(|node| render_node(node, depth))
        .collect();
    block('{', '}', &lines, depth)
}

fn render_node(node: &DiffNode, depth: usize) -> Vec<String> {
    let pad = " ".repeat(depth * INDENT_WIDTH + MARKER_WIDTH);
    let line = |marker: char, key: &str, value: &Value| {
        format!("{pad}{marker} {key}: {}", render_value(value, depth + 1))
    };

    match node {
        DiffNode::Added { key, value } => vec![line('+', key, value)],
        DiffNode::Removed { key, value } => vec![line('-', key, value)],
        DiffNode::Updated {
            key,
            old_value,
            new_value,
        } => vec![line('-', key, old_value), line('+', key, new_value)],
        DiffNode::Unchanged { key, value } => vec![line(' ', key, value)],
        DiffNode::Nested { key, children } => {
            vec![format!("{pad}  {key}: {}", render_level(children, depth + 1))]
        }
    }
}

/// Plain structural rendering of a value that sits at `depth`.
fn render_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => {
            let pad = indent(depth + 1);
            let lines: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{pad}{k}: {}", render_value(v, depth + 1)))
                .collect();
            block('{', '}', &lines, depth)
        }
        Value::Array(items) => {
            let pad = indent(depth + 1);
            let lines: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{pad}{i}: {}", render_value(v, depth + 1)))
                .collect();
            block('{', '}', &lines, depth)
        }
    }
}

fn block(open: char, close: char, lines: &[String], depth: usize) -> String {
    format!("{open}\n{}\n{}{close}", lines.join("\n"), indent(depth))
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}
