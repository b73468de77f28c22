//! The configuration value tree.
//!
//! Every decoder (YAML, JSON, or anything else speaking serde) ends up in the
//! same [`ConfigValue`] shape: scalars, sequences, and string-keyed mappings
//! that remember their insertion order.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::normalize::normalize;

/// A mapping that keeps its keys in insertion order.
///
/// Insertion order is what [`values_checksum`](crate::values_checksum)
/// hashes, and what [`sort_mapping`](crate::sort_mapping) rearranges.
pub type OrderedMapping = IndexMap<String, ConfigValue>;

/// A node in a decoded configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigValue {
    /// An explicit null, `~`, or empty scalar.
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A signed integer scalar.
    Integer(i64),
    /// An unsigned integer too large for [`ConfigValue::Integer`].
    Unsigned(u64),
    /// A floating point scalar.
    Float(OrderedFloat<f64>),
    /// A string scalar.
    String(String),
    /// An ordered list of values.
    Sequence(Vec<ConfigValue>),
    /// A string-keyed mapping in insertion order.
    Mapping(OrderedMapping),
}

impl ConfigValue {
    /// Returns true for every variant except sequences and mappings.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Returns the string content if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the mapping if this is a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&OrderedMapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the mapping mutably if this is a mapping.
    pub const fn as_mapping_mut(&mut self) -> Option<&mut OrderedMapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Unsigned(u) => serializer.serialize_u64(*u),
            Self::Float(f) => serializer.serialize_f64(f.into_inner()),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => items.serialize(serializer),
            Self::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

/// Decodes through [`serde_yaml::Value`], which accepts keys of any type,
/// then normalizes every key to text.
impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_yaml::Value::deserialize(deserializer).map(normalize)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Unsigned(u)
                } else {
                    Self::Float(OrderedFloat(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<OrderedMapping> for ConfigValue {
    fn from(mapping: OrderedMapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Vec<Self>> for ConfigValue {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u64> for ConfigValue {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Self::Unsigned(u), Self::Integer)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        Self::Float(OrderedFloat(f))
    }
}
