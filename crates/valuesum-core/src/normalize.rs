//! Key normalization for generically decoded documents.
//!
//! A YAML decoder that does not know the target type hands back mappings
//! keyed by arbitrary values (`1:`, `true:`, `~:` are all valid keys). The
//! functions here rewrite such trees so that every mapping is keyed by text.

use ordered_float::OrderedFloat;
use serde_yaml::Value;
use tracing::warn;

use crate::error::{ValuesError, ValuesResult};
use crate::value::{ConfigValue, OrderedMapping};
use crate::values::Values;

/// Converts a dynamically typed YAML tree into a [`ConfigValue`] whose
/// mappings are keyed by text, at any depth.
///
/// Tags are dropped; a tagged node normalizes to its content.
#[must_use]
pub fn normalize(value: Value) -> ConfigValue {
    match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                ConfigValue::Unsigned(u)
            } else {
                ConfigValue::Float(OrderedFloat(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(items) => ConfigValue::Sequence(items.into_iter().map(normalize).collect()),
        Value::Mapping(mapping) => ConfigValue::Mapping(normalize_mapping(mapping)),
        Value::Tagged(tagged) => normalize(tagged.value),
    }
}

/// Normalizes every entry of a YAML mapping, keeping the decoder's order.
#[must_use]
pub fn normalize_mapping(mapping: serde_yaml::Mapping) -> OrderedMapping {
    mapping
        .into_iter()
        .map(|(key, value)| (key_text(&key), normalize(value)))
        .collect()
}

/// Renders a mapping key as text.
///
/// Strings are used verbatim, null renders as `null`, booleans and numbers
/// use their display form, and tagged keys are prefixed with their tag.
/// Sequence and mapping keys render as flow-style (JSON) text.
#[must_use]
pub fn key_text(key: &Value) -> String {
    match key {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, key_text(&tagged.value)),
        Value::Sequence(_) | Value::Mapping(_) => {
            let flattened = normalize(key.clone());
            serde_json::to_string(&flattened).unwrap_or_else(|_| format!("{key:?}"))
        }
    }
}

/// Encodes the values into a dynamic [`serde_yaml::Value`] and normalizes
/// the result into a fresh copy.
///
/// This flattens whatever representation the values arrived in to the one
/// a plain YAML decoder produces. The encode stays at the value level, so
/// nesting depth is bounded only by the tree itself.
///
/// # Errors
///
/// Returns an error if the YAML serializer rejects the values.
pub fn round_trip(values: &Values) -> ValuesResult<Values> {
    let encoded = serde_yaml::to_value(values.as_mapping()).map_err(ValuesError::Encode)?;
    match encoded {
        Value::Mapping(mapping) => Ok(Values::from(normalize_mapping(mapping))),
        _ => Ok(Values::new()),
    }
}

/// Like [`round_trip`], but degrades to empty values instead of failing.
#[must_use]
pub fn flatten(values: &Values) -> Values {
    round_trip(values).unwrap_or_else(|err| {
        warn!(error = %err, entries = values.len(), "values round trip failed, using empty values");
        Values::new()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn yaml(document: &str) -> Value {
        serde_yaml::from_str(document).unwrap()
    }

    #[test]
    fn test_key_text_scalars() {
        assert_eq!(key_text(&Value::Null), "null");
        assert_eq!(key_text(&Value::Bool(false)), "false");
        assert_eq!(key_text(&yaml("42")), "42");
        assert_eq!(key_text(&yaml("-7")), "-7");
        assert_eq!(key_text(&Value::String("name".into())), "name");
    }

    #[test]
    fn test_key_text_null_and_float_keys() {
        assert_eq!(key_text(&yaml("~")), "null");
        assert_eq!(key_text(&yaml("null")), "null");
        assert_eq!(key_text(&yaml("1.0")), "1.0");
        assert_eq!(key_text(&yaml("2.5")), "2.5");
    }

    #[test]
    fn test_key_text_complex_key() {
        assert_eq!(key_text(&yaml("[a, 1]")), r#"["a",1]"#);
        assert_eq!(key_text(&yaml("{k: v}")), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_normalize_nested_non_string_keys() {
        let tree = yaml(
            "\
outer:
  1: one
  list:
  - 2: two
    nested:
      true: yes
"
        );

        let expected = ConfigValue::from(json!({
            "outer": {
                "1": "one",
                "list": [{"2": "two", "nested": {"true": "yes"}}]
            }
        }));
        assert_eq!(normalize(tree), expected);
    }

    #[test]
    fn test_normalize_keeps_decode_order() {
        let normalized = normalize(yaml("c: 1\na: 2\nb: 3\n"));

        let keys: Vec<&str> = normalized
            .as_mapping()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_normalize_string_keyed_tree_is_noop() {
        let original = ConfigValue::from(json!({
            "image": {"repository": "nginx", "tag": "1.25"},
            "replicas": 3,
            "ports": [80, 443],
            "extra": [{"name": "a"}, [1, 2]]
        }));

        let yaml_tree = serde_yaml::to_value(&original).unwrap();
        assert_eq!(normalize(yaml_tree), original);
    }

    #[test]
    fn test_normalize_drops_tags() {
        assert_eq!(normalize(yaml("!custom value")), ConfigValue::from("value"));
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let values = Values::from_yaml("b:\n  y: 1\n  x: [1, 2]\na: text\n").unwrap();

        let copy = round_trip(&values).unwrap();
        assert_eq!(copy, values);
        assert_eq!(copy.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_round_trip_deep_tree() {
        let mut leaf = ConfigValue::from("leaf");
        for depth in 0..200 {
            leaf = ConfigValue::Mapping([(format!("level{depth}"), leaf)].into_iter().collect());
        }
        let values: Values = [("root", leaf)].into_iter().collect();

        let copy = round_trip(&values).unwrap();
        assert_eq!(copy, values);
    }

    #[test]
    fn test_flatten_empty_values() {
        assert!(flatten(&Values::new()).is_empty());
    }
}
