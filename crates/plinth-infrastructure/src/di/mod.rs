//! Composition root plumbing
//!
//! How plugin modules contribute to the dependency graph:
//!
//! ```text
//! PluginModule (linkme slice PLUGIN_MODULES)
//! ├── registrars:    [Implementor<dyn DependencyRegistrar>]
//! └── startup_tasks: [Implementor<dyn StartupTask>]
//!            ↓ TypeScanner::find_implementors
//!     runner: instantiate → stable sort by order → invoke, fail-fast
//!            ↓
//!     CompositionBuilder ── build() ──→ Resolver
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`composition`] | Builder, resolver, lifetime scopes |
//! | [`plugin`] | Registrar / startup task traits and the plugin module registry |
//! | [`runner`] | Ordered execution of discovered units |
//! | [`registrars`] | Built-in registrars and startup task of this crate |

pub mod composition;
pub mod plugin;
pub mod registrars;
pub mod runner;

pub use composition::{
    CompositionBuilder, Lifetime, LifetimeScope, RegistrationInfo, Resolution, Resolver,
};
pub use plugin::{
    Capability, DependencyRegistrar, Implementor, ModuleKind, PLUGIN_MODULES, PluginModule,
    Registrars, StartupTask, StartupTasks, construct_registrar, construct_startup_task,
};
pub use runner::{run_registrars, run_startup_tasks};
