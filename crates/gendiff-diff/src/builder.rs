//! Document-level diff: walk two documents in lockstep and classify each key.
//!
//! Documents are represented as `serde_json::Map<String, Value>`. Keys from
//! both sides are merged, deduplicated and sorted byte-wise, so the output
//! order never depends on the order keys appeared in either source file.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::node::DiffNode;

/// A parsed configuration document.
pub type Document = Map<String, Value>;

/// Returns `true` if `value` is a mapping the builder may descend into.
///
/// `null`, scalars and sequences are all leaves.
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Compute the diff between two documents.
///
/// Keys present only in `new` are `Added`, keys present only in `old` are
/// `Removed`. Keys present in both recurse into `Nested` when both values are
/// mappings, and otherwise compare by value into `Updated` or `Unchanged`.
/// A mapping on one side and a scalar on the other is always `Updated`.
pub fn build_diff(old: &Document, new: &Document) -> Vec<DiffNode> {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    keys.into_iter()
        .map(|key| build_node(key, old.get(key), new.get(key)))
        .collect()
}

fn build_node(key: &str, old: Option<&Value>, new: Option<&Value>) -> DiffNode {
    let key = key.to_string();

    match (old, new) {
        (Some(old_val), None) => DiffNode::Removed {
            key,
            value: old_val.clone(),
        },
        (None, Some(new_val)) => DiffNode::Added {
            key,
            value: new_val.clone(),
        },
        (Some(Value::Object(old_map)), Some(Value::Object(new_map))) => DiffNode::Nested {
            key,
            children: build_diff(old_map, new_map),
        },
        (Some(old_val), Some(new_val)) if old_val != new_val => DiffNode::Updated {
            key,
            old_value: old_val.clone(),
            new_value: new_val.clone(),
        },
        (Some(old_val), Some(_)) => DiffNode::Unchanged {
            key,
            value: old_val.clone(),
        },
        // The key came from one of the two maps.
        (None, None) => unreachable!("key {key} missing from both documents"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    fn keys(nodes: &[DiffNode]) -> Vec<&str> {
        nodes.iter().map(DiffNode::key).collect()
    }

    #[test]
    fn identical_documents_all_unchanged() {
        let d = doc(json!({"a": 1, "b": "hello", "c": {"d": null}}));
        let diff = build_diff(&d, &d);
        assert_eq!(diff.len(), 3);
        assert!(diff[0].is_unchanged());
        assert!(diff[1].is_unchanged());
        assert!(diff[2].is_nested());
        assert!(diff[2].children().unwrap()[0].is_unchanged());
    }

    #[test]
    fn empty_documents_produce_empty_diff() {
        assert!(build_diff(&Document::new(), &Document::new()).is_empty());
    }

    #[test]
    fn flat_scenario() {
        let old = doc(json!({
            "host": "hexlet.io",
            "timeout": 50,
            "proxy": "123.234.53.22",
            "follow": false
        }));
        let new = doc(json!({
            "timeout": 20,
            "verbose": true,
            "host": "hexlet.io",
            "proxy": "123.234.53.22"
        }));

        let diff = build_diff(&old, &new);
        assert_eq!(keys(&diff), ["follow", "host", "proxy", "timeout", "verbose"]);
        assert_eq!(diff[0], DiffNode::Removed { key: "follow".into(), value: json!(false) });
        assert_eq!(diff[1], DiffNode::Unchanged { key: "host".into(), value: json!("hexlet.io") });
        assert_eq!(
            diff[2],
            DiffNode::Unchanged { key: "proxy".into(), value: json!("123.234.53.22") }
        );
        assert_eq!(
            diff[3],
            DiffNode::Updated { key: "timeout".into(), old_value: json!(50), new_value: json!(20) }
        );
        assert_eq!(diff[4], DiffNode::Added { key: "verbose".into(), value: json!(true) });
    }

    #[test]
    fn nested_scenario() {
        let old = doc(json!({"common": {"setting1": "Value 1"}}));
        let new = doc(json!({"common": {"setting1": "Value 1", "setting2": 200}}));

        let diff = build_diff(&old, &new);
        assert_eq!(diff.len(), 1);
        match &diff[0] {
            DiffNode::Nested { key, children } => {
                assert_eq!(key, "common");
                assert_eq!(children.len(), 2);
                assert!(children[0].is_unchanged());
                assert_eq!(
                    children[1],
                    DiffNode::Added { key: "setting2".into(), value: json!(200) }
                );
            }
            other => panic!("expected Nested, got {:?}", other),
        }
    }

    #[test]
    fn mapping_replaced_by_scalar_is_updated() {
        let old = doc(json!({"setting": {"key": "value"}}));
        let new = doc(json!({"setting": "str"}));

        let diff = build_diff(&old, &new);
        assert_eq!(
            diff[0],
            DiffNode::Updated {
                key: "setting".into(),
                old_value: json!({"key": "value"}),
                new_value: json!("str"),
            }
        );
    }

    #[test]
    fn null_is_never_descended_into() {
        let old = doc(json!({"nullable": null}));
        let new = doc(json!({"nullable": {"now": "object"}}));

        let diff = build_diff(&old, &new);
        assert!(diff[0].is_updated());
    }

    #[test]
    fn sequences_compare_by_value() {
        let old = doc(json!({"same": [1, 2], "changed": [1, 2]}));
        let new = doc(json!({"same": [1, 2], "changed": [2, 1]}));

        let diff = build_diff(&old, &new);
        assert!(diff[0].is_updated(), "changed");
        assert!(diff[1].is_unchanged(), "same");
    }

    #[test]
    fn type_change_detected() {
        let old = doc(json!({"value": 42}));
        let new = doc(json!({"value": "42"}));

        assert!(build_diff(&old, &new)[0].is_updated());
    }

    #[test]
    fn sort_is_byte_wise_and_case_sensitive() {
        let old = doc(json!({"b": 1, "B": 1}));
        let new = doc(json!({"a": 1, "_": 1}));

        let diff = build_diff(&old, &new);
        assert_eq!(keys(&diff), ["B", "_", "a", "b"]);
    }

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            (0i64..5).prop_map(Value::from),
            "[a-c]{0,2}".prop_map(Value::from),
        ]
    }

    fn value() -> impl Strategy<Value = Value> {
        leaf().prop_recursive(3, 24, 4, |inner| {
            prop::collection::btree_map("[a-e]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect()))
        })
    }

    fn document() -> impl Strategy<Value = Document> {
        prop::collection::btree_map("[a-fA-F]", value(), 0..6).prop_map(|m| m.into_iter().collect())
    }

    fn check_law(old: &Document, new: &Document, diff: &[DiffNode]) {
        let expected: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();
        let expected: Vec<&str> = expected.into_iter().collect();
        assert_eq!(keys(diff), expected);

        for node in diff {
            let key = node.key();
            match (old.get(key), new.get(key)) {
                (Some(a), None) => assert_eq!(node.value(), Some(a)),
                (None, Some(b)) => assert_eq!(node.value(), Some(b)),
                (Some(Value::Object(a)), Some(Value::Object(b))) => {
                    let children = node.children().expect("nested");
                    assert_eq!(children, build_diff(a, b).as_slice());
                    check_law(a, b, children);
                }
                (Some(a), Some(b)) if a == b => {
                    assert!(node.is_unchanged());
                    assert_eq!(node.value(), Some(a));
                }
                (Some(a), Some(b)) => {
                    assert_eq!(node.old_value(), Some(a));
                    assert_eq!(node.new_value(), Some(b));
                }
                (None, None) => panic!("{key} in diff but in neither document"),
            }
        }
    }

    proptest! {
        #[test]
        fn diff_covers_key_union_and_classifies(old in document(), new in document()) {
            let diff = build_diff(&old, &new);
            check_law(&old, &new, &diff);
        }

        #[test]
        fn self_diff_has_no_changes(d in document()) {
            fn all_unchanged(nodes: &[DiffNode]) -> bool {
                nodes.iter().all(|n| match n {
                    DiffNode::Unchanged { .. } => true,
                    DiffNode::Nested { children, .. } => all_unchanged(children),
                    _ => false,
                })
            }
            prop_assert!(all_unchanged(&build_diff(&d, &d)));
        }
    }
}
