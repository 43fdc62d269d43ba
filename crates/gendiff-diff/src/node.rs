//! The diff node model: one classified comparison result per key.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{DiffError, DiffResult};

/// The classification of a single key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Added,
    Removed,
    Updated,
    Unchanged,
    Nested,
}

impl NodeKind {
    /// All five kinds, in declaration order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Added,
        NodeKind::Removed,
        NodeKind::Updated,
        NodeKind::Unchanged,
        NodeKind::Nested,
    ];

    /// The wire name used in the structured projection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DiffError::UnknownNodeType(s.to_string()))
    }
}

/// The comparison result for a single key between two documents.
///
/// Each variant carries only the fields relevant to it: a single `value` for
/// additions, removals and unchanged entries, the before/after pair for
/// updates, and the recursive diff of two sub-mappings for nested entries.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffNode {
    /// The key exists only in the new document.
    Added { key: String, value: Value },
    /// The key exists only in the old document.
    Removed { key: String, value: Value },
    /// The key exists in both documents with different values.
    Updated {
        key: String,
        old_value: Value,
        new_value: Value,
    },
    /// The key exists in both documents with equal values.
    Unchanged { key: String, value: Value },
    /// Both documents map the key to a mapping; `children` diffs them.
    Nested { key: String, children: Vec<DiffNode> },
}

impl DiffNode {
    /// The key this node describes.
    pub fn key(&self) -> &str {
        match self {
            Self::Added { key, .. }
            | Self::Removed { key, .. }
            | Self::Updated { key, .. }
            | Self::Unchanged { key, .. }
            | Self::Nested { key, .. } => key,
        }
    }

    /// The classification of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Added { .. } => NodeKind::Added,
            Self::Removed { .. } => NodeKind::Removed,
            Self::Updated { .. } => NodeKind::Updated,
            Self::Unchanged { .. } => NodeKind::Unchanged,
            Self::Nested { .. } => NodeKind::Nested,
        }
    }

    /// Returns `true` if the node is `Added`.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    /// Returns `true` if the node is `Removed`.
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }

    /// Returns `true` if the node is `Updated`.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// Returns `true` if the node is `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged { .. })
    }

    /// Returns `true` if the node is `Nested`.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }

    /// The single value carried by added, removed and unchanged nodes.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Added { value, .. } | Self::Removed { value, .. } | Self::Unchanged { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }

    /// The value before the change, for updated nodes.
    pub fn old_value(&self) -> Option<&Value> {
        match self {
            Self::Updated { old_value, .. } => Some(old_value),
            _ => None,
        }
    }

    /// The value after the change, for updated nodes.
    pub fn new_value(&self) -> Option<&Value> {
        match self {
            Self::Updated { new_value, .. } => Some(new_value),
            _ => None,
        }
    }

    /// The child diff of a nested node.
    pub fn children(&self) -> Option<&[DiffNode]> {
        match self {
            Self::Nested { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Project this node into its canonical structured form.
    ///
    /// Fields are emitted in the order `key`, `type`, then `value`,
    /// `oldValue`/`newValue`, or `children` depending on the kind.
    pub fn to_structured(&self) -> Value {
        let mut out = Map::new();
        out.insert("key".into(), Value::String(self.key().to_string()));
        out.insert("type".into(), Value::String(self.kind().as_str().into()));

        match self {
            Self::Added { value, .. } | Self::Removed { value, .. } | Self::Unchanged { value, .. } => {
                out.insert("value".into(), value.clone());
            }
            Self::Updated {
                old_value,
                new_value,
                ..
            } => {
                out.insert("oldValue".into(), old_value.clone());
                out.insert("newValue".into(), new_value.clone());
            }
            Self::Nested { children, .. } => {
                out.insert(
                    "children".into(),
                    Value::Array(children.iter().map(DiffNode::to_structured).collect()),
                );
            }
        }

        Value::Object(out)
    }

    /// Rebuild a node from its structured form.
    ///
    /// Fails with [`DiffError::UnknownNodeType`] when `type` is not one of
    /// the five kinds, and with [`DiffError::MalformedNode`] when a field the
    /// kind requires is missing or has the wrong shape.
    pub fn from_structured(value: &Value) -> DiffResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| DiffError::MalformedNode("expected an object".into()))?;

        let key = obj
            .get("key")
            .and_then(Value::as_str)
            .ok_or_else(|| DiffError::MalformedNode("missing string field `key`".into()))?
            .to_string();

        let kind: NodeKind = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| DiffError::MalformedNode(format!("{key}: missing string field `type`")))?
            .parse()?;

        let node = match kind {
            NodeKind::Added => Self::Added {
                value: required(obj, &key, "value")?,
                key,
            },
            NodeKind::Removed => Self::Removed {
                value: required(obj, &key, "value")?,
                key,
            },
            NodeKind::Unchanged => Self::Unchanged {
                value: required(obj, &key, "value")?,
                key,
            },
            NodeKind::Updated => Self::Updated {
                old_value: required(obj, &key, "oldValue")?,
                new_value: required(obj, &key, "newValue")?,
                key,
            },
            NodeKind::Nested => {
                let children = obj
                    .get("children")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        DiffError::MalformedNode(format!("{key}: missing array field `children`"))
                    })?
                    .iter()
                    .map(DiffNode::from_structured)
                    .collect::<DiffResult<Vec<_>>>()?;
                Self::Nested { key, children }
            }
        };

        Ok(node)
    }
}

fn required(obj: &Map<String, Value>, key: &str, field: &str) -> DiffResult<Value> {
    obj.get(field)
        .cloned()
        .ok_or_else(|| DiffError::MalformedNode(format!("{key}: missing field `{field}`")))
}
