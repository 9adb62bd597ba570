//! Plugin SPI
//!
//! Each crate that contributes to the composition declares one
//! [`PluginModule`] in the [`PLUGIN_MODULES`] distributed slice. A module
//! lists its units as factory-table rows ([`Implementor`]) so the runners can
//! construct them without knowing their concrete types.
//!
//! ```ignore
//! #[linkme::distributed_slice(PLUGIN_MODULES)]
//! static BLOG_MODULE: PluginModule = PluginModule {
//!     name: "blog_plugin",
//!     kind: ModuleKind::Application,
//!     registrars: &[Implementor {
//!         type_name: "BlogRegistrar",
//!         create: construct_registrar::<BlogRegistrar>,
//!     }],
//!     startup_tasks: &[],
//! };
//! ```

use std::fmt;

use plinth_domain::error::Result;

use crate::config::AppConfig;
use crate::di::composition::{CompositionBuilder, Resolver};
use crate::discovery::TypeScanner;

/// Contributes registrations to the shared composition builder
///
/// Instantiated once per bootstrap and dropped after `register` returns.
pub trait DependencyRegistrar {
    /// Add registrations to the builder
    fn register(
        &self,
        builder: &mut CompositionBuilder,
        scanner: &TypeScanner,
        config: &AppConfig,
    ) -> Result<()>;

    /// Position in the registration sequence; lower runs first
    fn order(&self) -> i32 {
        0
    }
}

/// One-shot action run after the resolver is finalized
pub trait StartupTask {
    /// Run the task
    fn execute(&self, resolver: &Resolver) -> Result<()>;

    /// Position in the startup sequence; lower runs first
    fn order(&self) -> i32 {
        0
    }
}

/// Factory-table row for one unit type
pub struct Implementor<U: ?Sized + 'static> {
    /// Type name used in traces and errors
    pub type_name: &'static str,
    /// Default constructor
    pub create: fn() -> std::result::Result<Box<U>, String>,
}

impl<U: ?Sized> fmt::Debug for Implementor<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementor")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Construct a registrar through its `Default` implementation
pub fn construct_registrar<T>() -> std::result::Result<Box<dyn DependencyRegistrar>, String>
where
    T: DependencyRegistrar + Default + 'static,
{
    Ok(Box::new(T::default()))
}

/// Construct a startup task through its `Default` implementation
pub fn construct_startup_task<T>() -> std::result::Result<Box<dyn StartupTask>, String>
where
    T: StartupTask + Default + 'static,
{
    Ok(Box::new(T::default()))
}

/// Origin of a plugin module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Application or plugin code, scanned
    Application,
    /// Framework internals, never scanned
    System,
    /// Generated at runtime, never scanned
    Dynamic,
}

/// Units contributed by one compiled module
pub struct PluginModule {
    /// Unique module name; scanning order follows it
    pub name: &'static str,
    /// Whether the module is eligible for scanning
    pub kind: ModuleKind,
    /// Dependency registrars, in declaration order
    pub registrars: &'static [Implementor<dyn DependencyRegistrar>],
    /// Startup tasks, in declaration order
    pub startup_tasks: &'static [Implementor<dyn StartupTask>],
}

impl fmt::Debug for PluginModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginModule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("registrars", &self.registrars)
            .field("startup_tasks", &self.startup_tasks)
            .finish()
    }
}

// Auto-collection via linkme distributed slices - crates submit their module at compile time
#[linkme::distributed_slice]
pub static PLUGIN_MODULES: [PluginModule] = [..];

/// A role the scanner can look up implementors of
pub trait Capability: 'static {
    /// Trait object type of the role
    type Unit: ?Sized + 'static;

    /// Human-readable role name
    const NAME: &'static str;

    /// The module's implementors of this role
    fn implementors(module: &'static PluginModule) -> &'static [Implementor<Self::Unit>];

    /// Declared order of an instantiated unit
    fn order(unit: &Self::Unit) -> i32;
}

/// The dependency registrar role
#[derive(Debug, Clone, Copy)]
pub struct Registrars;

impl Capability for Registrars {
    type Unit = dyn DependencyRegistrar;

    const NAME: &'static str = "dependency registrar";

    fn implementors(module: &'static PluginModule) -> &'static [Implementor<Self::Unit>] {
        module.registrars
    }

    fn order(unit: &Self::Unit) -> i32 {
        unit.order()
    }
}

/// The startup task role
#[derive(Debug, Clone, Copy)]
pub struct StartupTasks;

impl Capability for StartupTasks {
    type Unit = dyn StartupTask;

    const NAME: &'static str = "startup task";

    fn implementors(module: &'static PluginModule) -> &'static [Implementor<Self::Unit>] {
        module.startup_tasks
    }

    fn order(unit: &Self::Unit) -> i32 {
        unit.order()
    }
}
