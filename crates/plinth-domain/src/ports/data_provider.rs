//! Data Provider Port
//!
//! Port for backend-specific data providers. Exactly one provider is selected
//! per bootstrap from the configured provider name; the concrete
//! implementations live in `plinth-providers` and register themselves into
//! the provider registry of `plinth-application`.
//!
//! Constructing a provider never performs I/O. Establishing the backend's
//! default connection mechanism is the separate, explicit
//! [`DataProvider::init_connection_factory`] step.

use crate::error::Result;
use crate::value_objects::ProviderFeature;

/// Backend data provider
pub trait DataProvider: Send + Sync {
    /// Canonical provider name (e.g. "mysql")
    fn provider_name(&self) -> &str;

    /// Establish the backend's default connection mechanism
    ///
    /// Must be idempotent.
    fn init_connection_factory(&self) -> Result<()>;

    /// Install the database initializer strategy
    fn set_database_initializer(&self) -> Result<()> {
        Ok(())
    }

    /// Initialize the database: connection factory, then initializer
    fn init_database(&self) -> Result<()> {
        self.init_connection_factory()?;
        self.set_database_initializer()
    }

    /// Whether the backend supports an optional feature
    fn supports(&self, feature: ProviderFeature) -> bool;

    /// Maximum data length for binary hash computation (0 = unsupported)
    fn supported_length_of_binary_hash(&self) -> usize;

    /// Format a named query parameter for this backend
    fn parameter_name(&self, name: &str) -> String {
        format!("@{name}")
    }
}
