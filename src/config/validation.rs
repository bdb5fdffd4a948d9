//! Input validation configuration

use serde::Deserialize;

use crate::domain::people::PackageNamePolicy;

/// Controls how strictly inputs are checked before records are created
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ValidationConfig {
    /// Package name policy for the registry
    #[serde(default)]
    pub package_names: PackageNamePolicy,
}
