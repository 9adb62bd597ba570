//! SQL Server data provider

use crate::connection::{ConnectionFactory, install_default_connection_factory};
use plinth_domain::constants::PROVIDER_SQLSERVER;
use plinth_domain::error::Result;
use plinth_domain::ports::DataProvider;
use plinth_domain::value_objects::{ProviderConfig, ProviderFeature};

/// Longest input SQL Server's `HASHBYTES` accepts before 2016
const SQLSERVER_BINARY_HASH_LENGTH: usize = 8000;

/// SQL Server data provider
#[derive(Debug, Clone)]
pub struct SqlServerDataProvider {
    connection_string: String,
}

impl SqlServerDataProvider {
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
}

impl DataProvider for SqlServerDataProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_SQLSERVER
    }

    fn init_connection_factory(&self) -> Result<()> {
        install_default_connection_factory(ConnectionFactory::new(
            PROVIDER_SQLSERVER,
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
        SQLSERVER_BINARY_HASH_LENGTH
    }
}

use plinth_application::registry::{DATA_PROVIDERS, DataProviderEntry};

#[linkme::distributed_slice(DATA_PROVIDERS)]
static SQLSERVER_PROVIDER: DataProviderEntry = DataProviderEntry {
    name: PROVIDER_SQLSERVER,
    description: "Microsoft SQL Server data provider",
    factory: |config: &ProviderConfig| {
        Ok(std::sync::Arc::new(SqlServerDataProvider::from_config(config)))
    },
};
