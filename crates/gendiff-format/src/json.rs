//! The `json` formatter: the structured projection of every node.

use gendiff_diff::DiffNode;
use serde_json::Value;

use crate::error::{FormatError, FormatResult};

/// Serialize the diff as a pretty-printed JSON array (2-space indentation).
pub fn render(diff: &[DiffNode]) -> FormatResult<String> {
    let projected: Vec<Value> = diff.iter().map(DiffNode::to_structured).collect();
    serde_json::to_string_pretty(&projected).map_err(|e| FormatError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendiff_diff::{build_diff, Document};
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn renders_every_kind() {
        let old = doc(json!({"keep": 1, "drop": "x", "change": true, "group": {"a": null}}));
        let new = doc(json!({"keep": 1, "add": [1], "change": false, "group": {"a": null}}));

        let expected = r#"[
  {
    "key": "add",
    "type": "added",
    "value": [
      1
    ]
  },
  {
    "key": "change",
    "type": "updated",
    "oldValue": true,
    "newValue": false
  },
  {
    "key": "drop",
    "type": "removed",
    "value": "x"
  },
  {
    "key": "group",
    "type": "nested",
    "children": [
      {
        "key": "a",
        "type": "unchanged",
        "value": null
      }
    ]
  },
  {
    "key": "keep",
    "type": "unchanged",
    "value": 1
  }
]"#;
        assert_eq!(render(&build_diff(&old, &new)).unwrap(), expected);
    }

    #[test]
    fn output_parses_back_into_same_nodes() {
        let old = doc(json!({"a": {"b": {"c": 1}, "d": "x"}, "e": null}));
        let new = doc(json!({"a": {"b": {"c": 2}, "f": []}, "e": {"g": 1}}));
        let diff = build_diff(&old, &new);

        let parsed: Value = serde_json::from_str(&render(&diff).unwrap()).unwrap();
        let rebuilt: Vec<DiffNode> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|v| DiffNode::from_structured(v).unwrap())
            .collect();
        assert_eq!(rebuilt, diff);
    }

    #[test]
    fn empty_diff_is_empty_array() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }
}
