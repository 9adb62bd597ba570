//! Plugin discovery filters

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DISCOVERY_RESTRICT_PATTERN, DEFAULT_DISCOVERY_SKIP_PATTERN};

/// Name filters applied to linked plugin modules
///
/// A module is scanned when its name does not match `skip_pattern` and does
/// match `restrict_pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Regex of module names never scanned
    pub skip_pattern: String,

    /// Regex a module name must match to be scanned
    pub restrict_pattern: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            skip_pattern: DEFAULT_DISCOVERY_SKIP_PATTERN.to_string(),
            restrict_pattern: DEFAULT_DISCOVERY_RESTRICT_PATTERN.to_string(),
        }
    }
}
