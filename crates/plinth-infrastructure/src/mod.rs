//! # Infrastructure Layer
//!
//! Bootstrap machinery and cross-cutting technical concerns.
//!
//! The engine discovers the units contributed by linked plugin modules, runs
//! them in order against one composition builder, seals the result into an
//! immutable resolver and then runs the startup tasks.
//!
//! ## Module Categories
//!
//! ### Composition Root
//! | Module | Description |
//! |--------|-------------|
//! | [`engine`] | Phased bootstrap and the process-wide engine |
//! | [`di`] | Composition container, plugin SPI, unit runners, built-in registrars |
//! | [`discovery`] | Capability scanner over linked plugin modules |
//!
//! ### Ambient Context
//! | Module | Description |
//! |--------|-------------|
//! | [`ambient`] | Per-scope context accessors and the fallback context |
//! | [`web_helper`] | Request-derived helpers over the ambient context |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors |

// Links the providers crate so its registry entries are present
extern crate plinth_providers;

pub mod ambient;
pub mod config;
pub mod constants;
pub mod di;
pub mod discovery;
pub mod engine;
pub mod error_ext;
pub mod logging;
pub mod web_helper;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{CompositionBuilder, DependencyRegistrar, LifetimeScope, Resolver, StartupTask};
pub use discovery::TypeScanner;
pub use engine::{BootstrapReport, Engine, EnginePhase};
pub use error_ext::ErrorContext;
