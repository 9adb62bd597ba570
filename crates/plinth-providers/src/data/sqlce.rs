//! SQL Server Compact data provider

use crate::connection::{ConnectionFactory, install_default_connection_factory};
use plinth_domain::constants::PROVIDER_SQLCE;
use plinth_domain::error::Result;
use plinth_domain::ports::DataProvider;
use plinth_domain::value_objects::{ProviderConfig, ProviderFeature};

/// SQL Server Compact data provider
///
/// Embedded engine: no stored procedures, no server-side backups.
#[derive(Debug, Clone)]
pub struct SqlCeDataProvider {
    connection_string: String,
}

impl SqlCeDataProvider {
    /// Create a provider from selected provider settings
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            connection_string: config.connection.clone(),
        }
    }
}

impl DataProvider for SqlCeDataProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_SQLCE
    }

    fn init_connection_factory(&self) -> Result<()> {
        install_default_connection_factory(ConnectionFactory::new(
            PROVIDER_SQLCE,
            self.connection_string.clone(),
        ));
        Ok(())
    }

    fn supports(&self, _feature: ProviderFeature) -> bool {
        false
    }

    fn supported_length_of_binary_hash(&self) -> usize {
        0
    }
}

use plinth_application::registry::{DATA_PROVIDERS, DataProviderEntry};

#[linkme::distributed_slice(DATA_PROVIDERS)]
static SQLCE_PROVIDER: DataProviderEntry = DataProviderEntry {
    name: PROVIDER_SQLCE,
    description: "SQL Server Compact embedded data provider",
    factory: |config: &ProviderConfig| {
        Ok(std::sync::Arc::new(SqlCeDataProvider::from_config(config)))
    },
};
