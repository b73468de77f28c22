//! Release records supplied by release storage.

use serde::{Deserialize, Serialize};

use crate::checksum::{ordered_values_checksum, values_checksum};
use crate::values::Values;

/// A deployed configuration instance.
///
/// Release storage bumps `version` on every install or upgrade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Name of the release.
    pub name: String,

    /// Namespace the release is installed in.
    #[serde(default)]
    pub namespace: String,

    /// Revision counter, starting at 1 for the first install.
    pub version: i32,

    /// Values the release was installed with.
    #[serde(default)]
    pub config: Values,
}

impl Release {
    /// Creates a release record with no values.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, version: i32) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            version,
            config: Values::new(),
        }
    }

    /// Sets the values the release was installed with.
    #[must_use]
    pub fn with_config(mut self, config: Values) -> Self {
        self.config = config;
        self
    }

    /// Checksum of the installed values, see [`values_checksum`].
    #[must_use]
    pub fn values_checksum(&self) -> String {
        values_checksum(&self.config)
    }

    /// Order-independent checksum of the installed values, see
    /// [`ordered_values_checksum`].
    #[must_use]
    pub fn ordered_values_checksum(&self) -> String {
        ordered_values_checksum(&self.config)
    }
}

/// Returns the revision of the release, or 0 when there is none.
#[must_use]
pub fn release_revision(release: Option<&Release>) -> i32 {
    release.map_or(0, |release| release.version)
}
