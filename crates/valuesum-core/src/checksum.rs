//! SHA-1 checksums of configuration values.
//!
//! The checksums detect changes in configuration; they are not meant to
//! resist tampering.

use sha1::{Digest, Sha1};
use tracing::{debug, warn};

use crate::normalize::flatten;
use crate::sort::sort_values;
use crate::values::Values;

/// Returns the lowercase hex SHA-1 digest of `bytes`.
#[must_use]
pub fn checksum_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha1::digest(bytes))
}

/// Returns the checksum of the values' YAML document, keys in insertion
/// order.
///
/// Empty values hash the empty document. Reordering keys changes the
/// result; use [`ordered_values_checksum`] when it must not.
#[must_use]
pub fn values_checksum(values: &Values) -> String {
    let document = if values.is_empty() {
        String::new()
    } else {
        encode_or_empty(values)
    };
    let checksum = checksum_bytes(document.as_bytes());
    debug!(entries = values.len(), %checksum, "computed values checksum");
    checksum
}

/// Returns the checksum of the values after normalizing them and sorting
/// their keys.
///
/// Two values with the same content produce the same checksum regardless
/// of key order or of how their keys were typed by the decoder. Mappings
/// inside a sequence that is itself a sequence element keep their order.
#[must_use]
pub fn ordered_values_checksum(values: &Values) -> String {
    let document = if values.is_empty() {
        String::new()
    } else {
        let mut canonical = flatten(values);
        sort_values(&mut canonical);
        encode_or_empty(&canonical)
    };
    let checksum = checksum_bytes(document.as_bytes());
    debug!(entries = values.len(), %checksum, "computed ordered values checksum");
    checksum
}

fn encode_or_empty(values: &Values) -> String {
    values.to_yaml().unwrap_or_else(|err| {
        warn!(error = %err, "failed to encode values, hashing empty document");
        String::new()
    })
}
