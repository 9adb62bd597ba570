//! Data provider registrations

use std::sync::Arc;

use plinth_application::registry::DataProviderManager;
use plinth_domain::error::Result;
use plinth_domain::ports::DataProvider;
use tracing::info;

use crate::config::{AppConfig, DataSettings};
use crate::di::composition::{CompositionBuilder, Resolver};
use crate::di::plugin::{DependencyRegistrar, StartupTask};
use crate::discovery::TypeScanner;

/// Selects the configured data provider and registers it
///
/// Invalid settings or an unknown provider name abort the registration
/// before any connection factory is initialized.
#[derive(Debug, Default)]
pub struct DataProviderRegistrar;

impl DependencyRegistrar for DataProviderRegistrar {
    fn register(
        &self,
        builder: &mut CompositionBuilder,
        _scanner: &TypeScanner,
        config: &AppConfig,
    ) -> Result<()> {
        let manager = DataProviderManager::new(config.data.provider_config());
        let provider = manager.load_data_provider()?;
        provider.init_connection_factory()?;
        info!(provider = provider.provider_name(), "Data provider registered");

        builder.register_instance::<DataSettings>(Arc::new(config.data.clone()));
        builder.register_instance(Arc::new(manager.settings().clone()));
        builder.register_instance(Arc::new(manager));
        builder.register_instance::<dyn DataProvider>(provider);
        Ok(())
    }
}

/// Runs database initialization on the selected provider
#[derive(Debug, Default)]
pub struct DataProviderStartupTask;

impl StartupTask for DataProviderStartupTask {
    fn execute(&self, resolver: &Resolver) -> Result<()> {
        let provider = resolver.resolve_one::<dyn DataProvider>()?;
        provider.init_database()?;
        info!(provider = provider.provider_name(), "Database initialized");
        Ok(())
    }
}
