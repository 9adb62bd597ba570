//! MySQL data provider
//!
//! Selected by the provider name `mysql` (case-insensitive). Construction
//! only captures the connection string; the default connection factory is
//! published by [`DataProvider::init_connection_factory`].

use crate::connection::{ConnectionFactory, install_default_connection_factory};
use plinth_domain::constants::PROVIDER_MYSQL;
use plinth_domain::error::Result;
use plinth_domain::ports::DataProvider;
use plinth_domain::value_objects::{ProviderConfig, ProviderFeature};

/// MySQL data provider
#[derive(Debug, Clone)]
pub struct MySqlDataProvider {
    connection_string: String,
}

impl MySqlDataProvider {
    /// Create a provider for the given connection string
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    /// Create a provider from selected provider settings
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.connection.clone())
    }

    /// Connection string this provider was configured with
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl DataProvider for MySqlDataProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_MYSQL
    }

    fn init_connection_factory(&self) -> Result<()> {
        install_default_connection_factory(ConnectionFactory::new(
            PROVIDER_MYSQL,
            self.connection_string.clone(),
        ));
        Ok(())
    }

    fn supports(&self, feature: ProviderFeature) -> bool {
        match feature {
            ProviderFeature::StoredProcedures | ProviderFeature::Backup => true,
        }
    }

    fn supported_length_of_binary_hash(&self) -> usize {
        0
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use plinth_application::registry::{DATA_PROVIDERS, DataProviderEntry};

#[linkme::distributed_slice(DATA_PROVIDERS)]
static MYSQL_PROVIDER: DataProviderEntry = DataProviderEntry {
    name: PROVIDER_MYSQL,
    description: "MySQL data provider",
    factory: |config: &ProviderConfig| {
        Ok(std::sync::Arc::new(MySqlDataProvider::from_config(config)))
    },
};
