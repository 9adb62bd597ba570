//! Default connection factory
//!
//! The backend's default connection mechanism is process-wide state: once a
//! provider has initialized it, any component opening a connection asks
//! [`default_connection_factory`] instead of knowing the selected backend.
//! Publishing goes through `arc-swap` so readers never lock.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::{debug, info};

static DEFAULT_CONNECTION_FACTORY: ArcSwapOption<ConnectionFactory> = ArcSwapOption::const_empty();

/// Describes how connections to the selected backend are created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionFactory {
    provider: &'static str,
    connection_string: String,
}

impl ConnectionFactory {
    /// Create a factory for a backend
    pub fn new(provider: &'static str, connection_string: impl Into<String>) -> Self {
        Self {
            provider,
            connection_string: connection_string.into(),
        }
    }

    /// Provider the factory belongs to
    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Connection string new connections are opened with
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

/// Publish a default connection factory
///
/// Idempotent: publishing a factory equal to the current one is a no-op.
/// Returns `true` when the published factory changed.
pub fn install_default_connection_factory(factory: ConnectionFactory) -> bool {
    if DEFAULT_CONNECTION_FACTORY.load().as_deref() == Some(&factory) {
        debug!(provider = factory.provider, "Connection factory already installed");
        return false;
    }
    info!(provider = factory.provider, "Installing default connection factory");
    DEFAULT_CONNECTION_FACTORY.store(Some(Arc::new(factory)));
    true
}

/// The currently published default connection factory, if any
pub fn default_connection_factory() -> Option<Arc<ConnectionFactory>> {
    DEFAULT_CONNECTION_FACTORY.load_full()
}
