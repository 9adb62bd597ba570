//! Data provider settings

use plinth_domain::value_objects::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Persisted data provider settings
///
/// ```toml
/// [data]
/// provider = "mysql"
/// connection_string = "Server=localhost;Database=site"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Provider name, matched case-insensitively
    pub provider: String,

    /// Backend connection string
    pub connection_string: String,
}

impl DataSettings {
    /// Create settings for a provider
    pub fn new(provider: impl Into<String>, connection_string: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            connection_string: connection_string.into(),
        }
    }

    /// Settings are valid when both the provider and the connection string
    /// are present
    pub fn is_valid(&self) -> bool {
        !self.provider.trim().is_empty() && !self.connection_string.trim().is_empty()
    }

    /// Value object handed to the provider selector
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.provider.clone(), self.connection_string.clone())
            .with_validity(self.is_valid())
    }
}
