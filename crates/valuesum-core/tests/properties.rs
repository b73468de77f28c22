//! Property tests for key-order invariance and sorting.
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use valuesum_core::{
    ConfigValue, OrderedMapping, Values, normalize, ordered_values_checksum, sort_mapping,
};

fn scalar() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        Just(ConfigValue::Null),
        any::<bool>().prop_map(ConfigValue::Bool),
        any::<i64>().prop_map(ConfigValue::Integer),
        ((1_u64 << 63)..=u64::MAX).prop_map(ConfigValue::Unsigned),
        (-1.0e6..1.0e6f64).prop_map(ConfigValue::from),
        "[a-z0-9 ]{0,12}".prop_map(ConfigValue::String),
    ]
}

fn config_value() -> impl Strategy<Value = ConfigValue> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(ConfigValue::Sequence),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..5)
                .prop_map(|entries| ConfigValue::Mapping(entries.into_iter().collect())),
        ]
    })
}

fn values() -> impl Strategy<Value = Values> {
    prop::collection::vec(("[a-z]{1,6}", config_value()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Reverses key order at every level the sorter reaches.
fn reverse_mapping(mapping: &OrderedMapping) -> OrderedMapping {
    mapping
        .iter()
        .rev()
        .map(|(key, value)| (key.clone(), reverse_value(value)))
        .collect()
}

fn reverse_value(value: &ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Mapping(nested) => ConfigValue::Mapping(reverse_mapping(nested)),
        ConfigValue::Sequence(items) => ConfigValue::Sequence(
            items
                .iter()
                .map(|item| match item {
                    ConfigValue::Mapping(nested) => ConfigValue::Mapping(reverse_mapping(nested)),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn ordered_checksum_ignores_key_order(values in values()) {
        let reversed = Values::from(reverse_mapping(values.as_mapping()));

        prop_assert_eq!(
            ordered_values_checksum(&values),
            ordered_values_checksum(&reversed)
        );
    }

    #[test]
    fn sorting_is_idempotent(values in values()) {
        let mut once = values.into_mapping();
        sort_mapping(&mut once);
        let mut twice = once.clone();
        sort_mapping(&mut twice);

        prop_assert_eq!(
            serde_yaml::to_string(&once).unwrap(),
            serde_yaml::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn normalize_is_noop_on_string_keyed_trees(value in config_value()) {
        let dynamic = serde_yaml::to_value(&value).unwrap();
        prop_assert_eq!(normalize(dynamic), value);
    }

    #[test]
    fn ordered_checksum_is_hex_40(values in values()) {
        let checksum = ordered_values_checksum(&values);
        prop_assert_eq!(checksum.len(), 40);
        prop_assert!(checksum.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
