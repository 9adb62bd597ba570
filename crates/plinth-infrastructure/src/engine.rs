//! Engine (composition root)
//!
//! Assembles the dependency graph in strictly sequential phases:
//!
//! ```text
//! Uninitialized
//!   → BootstrapSingletonsRegistered   engine, AppConfig, TypeScanner
//!   → PluginRegistrarsApplied         discovered DependencyRegistrars, by order
//!   → ResolverFinalized               builder sealed, resolver published
//!   → StartupTasksExecuted | StartupTasksSkipped
//!   → Ready
//! ```
//!
//! A failure before `ResolverFinalized` leaves the engine without a
//! resolver for good. A failing startup task is reported to the caller but
//! the published resolver stays usable; the engine then remains at
//! `ResolverFinalized`. No phase is re-entered.
//!
//! The process-wide engine is created through [`initialize`] and reached
//! through [`current`].

use std::any::type_name;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use once_cell::sync::OnceCell;
use plinth_domain::error::{Error, Result};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::di::composition::{CompositionBuilder, LifetimeScope, Resolver};
use crate::di::runner::{run_registrars, run_startup_tasks};
use crate::discovery::TypeScanner;

/// Bootstrap phase of an [`Engine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnginePhase {
    /// Nothing registered yet
    Uninitialized,
    /// Engine, configuration and scanner registered
    BootstrapSingletonsRegistered,
    /// Every dependency registrar has run
    PluginRegistrarsApplied,
    /// The resolver is sealed and published
    ResolverFinalized,
    /// Every startup task has run
    StartupTasksExecuted,
    /// Startup tasks were skipped by configuration
    StartupTasksSkipped,
    /// Bootstrap complete
    Ready,
}

impl EnginePhase {
    /// Phase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::BootstrapSingletonsRegistered => "BootstrapSingletonsRegistered",
            Self::PluginRegistrarsApplied => "PluginRegistrarsApplied",
            Self::ResolverFinalized => "ResolverFinalized",
            Self::StartupTasksExecuted => "StartupTasksExecuted",
            Self::StartupTasksSkipped => "StartupTasksSkipped",
            Self::Ready => "Ready",
        }
    }

    /// Whether the resolver is available in this phase
    pub fn is_finalized(&self) -> bool {
        matches!(
            self,
            Self::ResolverFinalized
                | Self::StartupTasksExecuted
                | Self::StartupTasksSkipped
                | Self::Ready
        )
    }
}

impl fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a completed bootstrap did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Registrars invoked, in invocation order
    pub registrars: Vec<&'static str>,
    /// Startup tasks invoked, in invocation order; `None` when skipped
    pub startup_tasks: Option<Vec<&'static str>>,
    /// Phase reached
    pub phase: EnginePhase,
}

/// Composition root
pub struct Engine {
    config: Arc<AppConfig>,
    scanner: Arc<TypeScanner>,
    phase: Mutex<EnginePhase>,
    resolver: OnceCell<Resolver>,
    this: Weak<Engine>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("phase", &self.phase())
            .field("modules", &self.scanner.modules().len())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create an engine in the `Uninitialized` phase
    pub fn new(config: AppConfig, scanner: TypeScanner) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            config: Arc::new(config),
            scanner: Arc::new(scanner),
            phase: Mutex::new(EnginePhase::Uninitialized),
            resolver: OnceCell::new(),
            this: this.clone(),
        })
    }

    /// Current phase
    pub fn phase(&self) -> EnginePhase {
        *self.lock_phase()
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Scanner the engine discovers units with
    pub fn scanner(&self) -> &TypeScanner {
        &self.scanner
    }

    /// Run the bootstrap
    ///
    /// Fails with [`Error::InvalidPhase`] unless the engine is
    /// `Uninitialized`.
    pub fn initialize(&self) -> Result<BootstrapReport> {
        let mut builder = CompositionBuilder::new();
        {
            // Held across the check so concurrent callers cannot both start
            let mut phase = self.lock_phase();
            if *phase != EnginePhase::Uninitialized {
                return Err(Error::invalid_phase(EnginePhase::Uninitialized, *phase));
            }
            info!(modules = self.scanner.modules().len(), "Engine bootstrap started");
            self.register_bootstrap_singletons(&mut builder);
            *phase = EnginePhase::BootstrapSingletonsRegistered;
        }
        info!(phase = %EnginePhase::BootstrapSingletonsRegistered, "Engine phase reached");

        let registrars = run_registrars(&mut builder, &self.scanner, &self.config)
            .inspect_err(|e| error!(error = %e, "Bootstrap aborted before finalization"))?;
        self.advance(EnginePhase::PluginRegistrarsApplied);

        let resolver = builder.build();
        if self.resolver.set(resolver).is_err() {
            return Err(Error::invalid_phase(
                EnginePhase::PluginRegistrarsApplied,
                EnginePhase::ResolverFinalized,
            ));
        }
        self.advance(EnginePhase::ResolverFinalized);

        let resolver = self.finalized_resolver()?;
        let skip = self.config.startup.ignore_startup_tasks;
        let startup_tasks = run_startup_tasks(resolver, &self.scanner, skip)
            .inspect_err(|e| error!(error = %e, "Startup task failed, resolver kept"))?;
        self.advance(if startup_tasks.is_some() {
            EnginePhase::StartupTasksExecuted
        } else {
            EnginePhase::StartupTasksSkipped
        });

        self.advance(EnginePhase::Ready);
        Ok(BootstrapReport {
            registrars,
            startup_tasks,
            phase: EnginePhase::Ready,
        })
    }

    /// Finalized resolver, once published
    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.get()
    }

    /// Resolve the single registration for `T`
    pub fn resolve_one<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.finalized_resolver()?.resolve_one::<T>()
    }

    /// Resolve every registration for `T`, in registration order
    pub fn resolve_all<T>(&self) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.finalized_resolver()?.resolve_all::<T>()
    }

    /// Open a lifetime scope on the finalized resolver
    pub fn begin_scope(&self) -> Result<LifetimeScope> {
        Ok(self.finalized_resolver()?.begin_scope())
    }

    fn finalized_resolver(&self) -> Result<&Resolver> {
        self.resolver
            .get()
            .ok_or_else(|| Error::invalid_phase(EnginePhase::ResolverFinalized, self.phase()))
    }

    fn register_bootstrap_singletons(&self, builder: &mut CompositionBuilder) {
        // Upgraded on every resolution; the resolver never owns the engine
        let this = self.this.clone();
        builder.register_transient::<Engine, _>(move |_| {
            this.upgrade()
                .ok_or_else(|| Error::resolution(type_name::<Engine>(), "engine has been dropped"))
        });
        builder.register_instance(Arc::clone(&self.config));
        builder.register_instance(Arc::clone(&self.scanner));
    }

    fn advance(&self, next: EnginePhase) {
        *self.lock_phase() = next;
        info!(phase = %next, "Engine phase reached");
    }

    fn lock_phase(&self) -> MutexGuard<'_, EnginePhase> {
        // The phase is a plain value, so a poisoned lock still holds a valid one
        self.phase
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

static ENGINE: OnceCell<Arc<Engine>> = OnceCell::new();
static INITIALIZING: AtomicBool = AtomicBool::new(false);

/// Create and bootstrap the process-wide engine
///
/// The engine is published before its bootstrap runs, so [`current`] returns
/// it even when a startup task fails. Only the first call in a process
/// proceeds; any later call fails with [`Error::InvalidPhase`].
pub fn initialize(config: AppConfig, scanner: TypeScanner) -> Result<BootstrapReport> {
    if INITIALIZING.swap(true, Ordering::AcqRel) {
        let actual = current().map_or(EnginePhase::Uninitialized, |engine| engine.phase());
        return Err(Error::invalid_phase(EnginePhase::Uninitialized, actual));
    }
    let engine = Engine::new(config, scanner);
    if ENGINE.set(Arc::clone(&engine)).is_err() {
        return Err(Error::invalid_phase(
            EnginePhase::Uninitialized,
            "already published",
        ));
    }
    engine.initialize()
}

/// The process-wide engine, once [`initialize`] has been called
pub fn current() -> Option<Arc<Engine>> {
    ENGINE.get().cloned()
}
