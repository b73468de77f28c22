//! Valuesum Core - configuration value checksums
//!
//! This crate fingerprints configuration values so that callers can tell
//! whether the effective configuration of a release changed.
//!
//! - [`values_checksum`] hashes the values as given.
//! - [`ordered_values_checksum`] normalizes key types and sorts keys first,
//!   so key order and decoder quirks do not affect the result.
//! - [`release_revision`] reads the revision off an optional release.
//!
//! # Example
//!
//! ```
//! use valuesum_core::{ordered_values_checksum, values_checksum, Values};
//!
//! let a = Values::from_yaml("image:\n  tag: v1\n  repository: nginx\n").unwrap();
//! let b = Values::from_yaml("image:\n  repository: nginx\n  tag: v1\n").unwrap();
//!
//! assert_eq!(ordered_values_checksum(&a), ordered_values_checksum(&b));
//! assert_ne!(values_checksum(&a), values_checksum(&b));
//! ```

pub mod checksum;
pub mod error;
pub mod normalize;
pub mod release;
pub mod sort;
pub mod value;
pub mod values;

pub use checksum::{checksum_bytes, ordered_values_checksum, values_checksum};
pub use error::{ValuesError, ValuesResult};
pub use normalize::{flatten, key_text, normalize, normalize_mapping, round_trip};
pub use release::{Release, release_revision};
pub use sort::{sort_mapping, sort_values};
pub use value::{ConfigValue, OrderedMapping};
pub use values::Values;
