//! Domain Value Objects
//!
//! Immutable values exchanged between the settings loader, the provider
//! registry and concrete providers.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ProviderConfig`] | Provider name, connection string and validity flag |
//! | [`ProviderFeature`] | Optional backend capabilities queried by higher layers |

/// Data provider value objects
pub mod provider;

pub use provider::{ProviderConfig, ProviderFeature};
