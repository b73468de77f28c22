//! Top-level configuration values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ValuesError, ValuesResult};
use crate::normalize::normalize_mapping;
use crate::value::{ConfigValue, OrderedMapping};

/// The root mapping of a configuration document, such as the values a
/// release is installed with.
///
/// Keys keep the order they were inserted or decoded in.
///
/// # Example
///
/// ```
/// use valuesum_core::{ConfigValue, Values};
///
/// let values = Values::from_yaml("replicas: 2\nimage: nginx\n").unwrap();
///
/// assert_eq!(values.len(), 2);
/// assert_eq!(values.get("image").and_then(ConfigValue::as_str), Some("nginx"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: OrderedMapping,
}

impl Values {
    /// Creates empty values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes values from a YAML document.
    ///
    /// Non-string keys anywhere in the document are rendered as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML or its root is not
    /// a mapping.
    pub fn from_yaml(document: &str) -> ValuesResult<Self> {
        serde_yaml::from_str(document).map_err(ValuesError::Decode)
    }

    /// Encodes the values as a YAML document, keys in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML encoder rejects the values.
    pub fn to_yaml(&self) -> ValuesResult<String> {
        serde_yaml::to_string(&self.entries).map_err(ValuesError::Encode)
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a top-level value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Inserts a top-level value, returning the previous value for the key.
    ///
    /// A new key goes to the end; an existing key keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the top-level entries in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigValue> {
        self.entries.iter()
    }

    /// Returns the underlying mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> &OrderedMapping {
        &self.entries
    }

    /// Returns the underlying mapping mutably.
    pub const fn as_mapping_mut(&mut self) -> &mut OrderedMapping {
        &mut self.entries
    }

    /// Consumes the values, returning the underlying mapping.
    #[must_use]
    pub fn into_mapping(self) -> OrderedMapping {
        self.entries
    }
}

impl From<OrderedMapping> for Values {
    fn from(entries: OrderedMapping) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Values {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Values {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_yaml::Mapping::deserialize(deserializer).map(|mapping| Self {
            entries: normalize_mapping(mapping),
        })
    }
}
