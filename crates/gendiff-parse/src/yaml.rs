//! Conversion from the YAML value model into the JSON value model.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// Convert a parsed YAML value into a JSON value.
///
/// Mapping keys that are not strings are rendered in their natural text form
/// (`1`, `true`, `null`). Tags are dropped in favour of the tagged value.
/// Floats JSON cannot represent (`.nan`, `.inf`) become `null`.
pub(crate) fn yaml_to_json(yaml: YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::from(u))
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut obj = Map::new();
            for (k, v) in mapping {
                obj.insert(key_to_string(k), yaml_to_json(v));
            }
            Value::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn key_to_string(key: YamlValue) -> String {
    match yaml_to_json(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
