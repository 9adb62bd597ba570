//! Data Provider Registry
//!
//! Auto-registration system for data providers using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! selected at bootstrap from the configured provider name.

use std::sync::Arc;

use plinth_domain::error::{Error, Result};
use plinth_domain::ports::DataProvider;
use plinth_domain::value_objects::ProviderConfig;
use tracing::{debug, info};

/// Registry entry for data providers
///
/// Each data provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(DATA_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create provider instances.
pub struct DataProviderEntry {
    /// Canonical provider name, lowercase (e.g. "sqlserver", "mysql", "sqlce")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the provider; must not perform I/O
    pub factory: fn(&ProviderConfig) -> Result<Arc<dyn DataProvider>>,
}

impl std::fmt::Debug for DataProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProviderEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static DATA_PROVIDERS: [DataProviderEntry] = [..];

/// Select a data provider from an explicit set of entries
///
/// Selection rules, in order:
/// 1. Settings flagged invalid fail with a configuration error before the
///    name is inspected.
/// 2. A blank name fails with a configuration error.
/// 3. The name is trimmed and lowercased, then matched against the entry
///    names. No match fails with [`Error::UnsupportedProvider`] carrying the
///    name exactly as configured.
/// 4. The matching entry's factory constructs the provider.
///
/// There is no default provider.
pub fn select_data_provider(
    entries: &[DataProviderEntry],
    config: &ProviderConfig,
) -> Result<Arc<dyn DataProvider>> {
    if !config.is_valid {
        return Err(Error::configuration("invalid provider settings"));
    }
    if config.name.trim().is_empty() {
        return Err(Error::configuration("missing provider name"));
    }

    let canonical = config.normalized_name();
    debug!(provider = %config.name, canonical = %canonical, "Selecting data provider");

    let Some(entry) = entries.iter().find(|entry| entry.name == canonical) else {
        let available = entries.iter().map(|e| e.name).collect();
        return Err(Error::unsupported_provider(config.name.clone(), available));
    };

    let provider = (entry.factory)(config)?;
    info!(provider = entry.name, "Data provider selected");
    Ok(provider)
}

/// Resolve the data provider by name from the linked registry
///
/// # Example
///
/// ```ignore
/// let config = ProviderConfig::new("mysql", "Server=localhost");
/// let provider = resolve_data_provider(&config)?;
/// provider.init_connection_factory()?;
/// ```
pub fn resolve_data_provider(config: &ProviderConfig) -> Result<Arc<dyn DataProvider>> {
    select_data_provider(&DATA_PROVIDERS, config)
}

/// List all registered data providers
///
/// Returns a list of (name, description) tuples for all registered
/// data providers. Useful for CLI help.
pub fn list_data_providers() -> Vec<(&'static str, &'static str)> {
    DATA_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// Data provider manager
///
/// Holds the provider settings loaded before bootstrap and loads the
/// matching provider from the registry on demand.
#[derive(Debug, Clone)]
pub struct DataProviderManager {
    settings: ProviderConfig,
}

impl DataProviderManager {
    /// Create a manager over the given settings
    pub fn new(settings: ProviderConfig) -> Self {
        Self { settings }
    }

    /// Settings this manager selects from
    pub fn settings(&self) -> &ProviderConfig {
        &self.settings
    }

    /// Load the configured data provider
    pub fn load_data_provider(&self) -> Result<Arc<dyn DataProvider>> {
        resolve_data_provider(&self.settings)
    }
}
