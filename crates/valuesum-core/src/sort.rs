//! Recursive key sorting for ordered mappings.

use crate::value::{ConfigValue, OrderedMapping};
use crate::values::Values;

/// Sorts a mapping by key, in place, together with every mapping nested
/// beneath it.
///
/// Keys compare as text. Mapping values are sorted recursively, and so are
/// mappings that are direct elements of a sequence value. A sequence nested
/// inside another sequence is left untouched, including any mappings it
/// holds.
pub fn sort_mapping(mapping: &mut OrderedMapping) {
    mapping.sort_keys();
    for value in mapping.values_mut() {
        match value {
            ConfigValue::Mapping(nested) => sort_mapping(nested),
            ConfigValue::Sequence(items) => {
                for item in items {
                    if let ConfigValue::Mapping(nested) = item {
                        sort_mapping(nested);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Sorts the values by key at every level [`sort_mapping`] reaches.
pub fn sort_values(values: &mut Values) {
    sort_mapping(values.as_mapping_mut());
}
