//! Error types for values encoding and decoding

use thiserror::Error;

/// Errors raised while moving values through their YAML document form.
///
/// The checksum functions never surface these; they log them and fall back
/// to an empty document.
#[derive(Debug, Error)]
pub enum ValuesError {
    /// The values could not be encoded as a YAML document.
    #[error("failed to encode values as YAML: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// A YAML document could not be decoded into values.
    #[error("failed to decode values from YAML: {0}")]
    Decode(#[source] serde_yaml::Error),
}

impl ValuesError {
    /// Returns true if the error happened while encoding.
    #[must_use]
    pub const fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    /// Returns true if the error happened while decoding.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result type alias for values operations.
pub type ValuesResult<T> = Result<T, ValuesError>;
