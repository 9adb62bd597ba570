//! # Plinth
//!
//! Plugin discovery and composition root bootstrap. Plugin crates submit
//! dependency registrars and startup tasks into a link-time registry; the
//! engine discovers them, builds the dependency graph in order, seals it and
//! then runs the startup tasks.
//!
//! ## Example
//!
//! ```ignore
//! use plinth::infrastructure::{ConfigLoader, TypeScanner, engine};
//!
//! let config = ConfigLoader::new().load()?;
//! let scanner = TypeScanner::linked()?.with_filters(&config.discovery)?;
//! let report = engine::initialize(config, scanner)?;
//! let provider = engine::current()
//!     .expect("initialized")
//!     .resolve_one::<dyn plinth::domain::DataProvider>()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, ports, value objects
//! - `application` - Data provider registry and selector
//! - `infrastructure` - Config, logging, discovery, container, engine
//! - `providers` - Data provider implementations

// Force-link plinth-providers so their registry entries are present
extern crate plinth_providers;

pub mod launcher;

/// Domain layer - errors, ports and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use plinth_domain::*;
}

/// Application layer - provider registry
pub mod application {
    pub use plinth_application::*;
}

/// Infrastructure layer - config, discovery, container and engine
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use plinth_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use plinth_providers::*;
}

pub use domain::{Error, Result};
pub use infrastructure::engine::{BootstrapReport, Engine, EnginePhase};
pub use launcher::{LaunchOptions, run};
