//! Data provider value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings used to select and construct the data provider
///
/// Produced once by the settings loader before bootstrap and consumed by the
/// provider registry. The validity flag is computed by whoever produces the
/// value; the selector trusts it and never re-derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name as configured (e.g. "mysql", "SqlServer")
    pub name: String,
    /// Backend connection string
    pub connection: String,
    /// Whether the settings are usable at all
    pub is_valid: bool,
}

impl ProviderConfig {
    /// Create a config, deriving validity from non-blank name and connection
    pub fn new(name: impl Into<String>, connection: impl Into<String>) -> Self {
        let name = name.into();
        let connection = connection.into();
        let is_valid = !name.trim().is_empty() && !connection.trim().is_empty();
        Self {
            name,
            connection,
            is_valid,
        }
    }

    /// Override the validity flag
    #[must_use]
    pub fn with_validity(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }

    /// Name normalized for case-insensitive matching
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_ascii_lowercase()
    }
}

/// Optional capability of a backend provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderFeature {
    /// Stored procedures can be executed
    StoredProcedures,
    /// The backend supports database backups
    Backup,
}

impl ProviderFeature {
    /// All known features
    pub const ALL: [ProviderFeature; 2] =
        [ProviderFeature::StoredProcedures, ProviderFeature::Backup];

    /// Get the feature name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderFeature::StoredProcedures => "stored_procedures",
            ProviderFeature::Backup => "backup",
        }
    }
}

impl fmt::Display for ProviderFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
