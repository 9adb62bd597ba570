//! Plugin units shared by the engine tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use plinth_domain::error::{Error, Result};
use plinth_infrastructure::config::{AppConfig, DataSettings};
use plinth_infrastructure::di::{
    CompositionBuilder, DependencyRegistrar, Implementor, ModuleKind, PluginModule, Resolver,
    StartupTask, construct_registrar, construct_startup_task,
};
use plinth_infrastructure::discovery::TypeScanner;
use plinth_infrastructure::engine::{Engine, EnginePhase};

/// Entry a registrar leaves in the graph
pub struct Trace(pub &'static str);

/// Log startup tasks append to; registered by [`OrderFiveUnit`]
#[derive(Default)]
pub struct Journal(Mutex<Vec<String>>);

impl Journal {
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }
}

#[derive(Default)]
pub struct OrderFiveUnit;

impl DependencyRegistrar for OrderFiveUnit {
    fn register(
        &self,
        builder: &mut CompositionBuilder,
        _: &TypeScanner,
        _: &AppConfig,
    ) -> Result<()> {
        builder.register_instance(Arc::new(Journal::default()));
        builder.register_instance(Arc::new(Trace("unit(order=5)")));
        Ok(())
    }

    fn order(&self) -> i32 {
        5
    }
}

#[derive(Default)]
pub struct OrderTenUnit;

impl DependencyRegistrar for OrderTenUnit {
    fn register(
        &self,
        builder: &mut CompositionBuilder,
        _: &TypeScanner,
        _: &AppConfig,
    ) -> Result<()> {
        builder.register_instance(Arc::new(Trace("unit(order=10)")));
        Ok(())
    }

    fn order(&self) -> i32 {
        10
    }
}

#[derive(Default)]
pub struct OrderOneTask;

impl StartupTask for OrderOneTask {
    fn execute(&self, resolver: &Resolver) -> Result<()> {
        let journal = resolver.resolve_one::<Journal>()?;
        let phase = resolver.resolve_one::<Engine>()?.phase();
        journal.push(format!("phase={phase}"));
        journal.push("startup task(order=1)");
        Ok(())
    }

    fn order(&self) -> i32 {
        1
    }
}

pub static SKIPPED_TASK_RAN: AtomicBool = AtomicBool::new(false);

#[derive(Default)]
pub struct SkippedTask;

impl StartupTask for SkippedTask {
    fn execute(&self, _: &Resolver) -> Result<()> {
        SKIPPED_TASK_RAN.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub static GUARD_RUNS: AtomicUsize = AtomicUsize::new(0);

/// Ordered after the data provider registrar; must never run when provider
/// selection fails
#[derive(Default)]
pub struct GuardUnit;

impl DependencyRegistrar for GuardUnit {
    fn register(&self, _: &mut CompositionBuilder, _: &TypeScanner, _: &AppConfig) -> Result<()> {
        GUARD_RUNS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn order(&self) -> i32 {
        50
    }
}

#[derive(Default)]
pub struct FailingTask;

impl StartupTask for FailingTask {
    fn execute(&self, _: &Resolver) -> Result<()> {
        Err(Error::infrastructure("search index unavailable"))
    }

    fn order(&self) -> i32 {
        2
    }
}

pub static STOREFRONT_MODULE: PluginModule = PluginModule {
    name: "storefront_plugin",
    kind: ModuleKind::Application,
    // Declared out of order on purpose
    registrars: &[
        Implementor {
            type_name: "OrderTenUnit",
            create: construct_registrar::<OrderTenUnit>,
        },
        Implementor {
            type_name: "OrderFiveUnit",
            create: construct_registrar::<OrderFiveUnit>,
        },
    ],
    startup_tasks: &[Implementor {
        type_name: "OrderOneTask",
        create: construct_startup_task::<OrderOneTask>,
    }],
};

pub static SKIPPABLE_MODULE: PluginModule = PluginModule {
    name: "skippable_plugin",
    kind: ModuleKind::Application,
    registrars: &[Implementor {
        type_name: "OrderFiveUnit",
        create: construct_registrar::<OrderFiveUnit>,
    }],
    startup_tasks: &[Implementor {
        type_name: "SkippedTask",
        create: construct_startup_task::<SkippedTask>,
    }],
};

pub static GUARDED_MODULE: PluginModule = PluginModule {
    name: "guarded_plugin",
    kind: ModuleKind::Application,
    registrars: &[Implementor {
        type_name: "GuardUnit",
        create: construct_registrar::<GuardUnit>,
    }],
    startup_tasks: &[],
};

pub static FAILING_MODULE: PluginModule = PluginModule {
    name: "failing_plugin",
    kind: ModuleKind::Application,
    registrars: &[Implementor {
        type_name: "OrderFiveUnit",
        create: construct_registrar::<OrderFiveUnit>,
    }],
    startup_tasks: &[
        Implementor {
            type_name: "FailingTask",
            create: construct_startup_task::<FailingTask>,
        },
        Implementor {
            type_name: "OrderOneTask",
            create: construct_startup_task::<OrderOneTask>,
        },
    ],
};

/// Configuration selecting a provider
pub fn config_for(provider: &str, connection: &str) -> AppConfig {
    AppConfig {
        data: DataSettings::new(provider, connection),
        ..AppConfig::default()
    }
}

/// Engine over the infrastructure module plus the given modules
pub fn engine_with(config: AppConfig, modules: &[&'static PluginModule]) -> Arc<Engine> {
    let scanner = TypeScanner::new(
        std::iter::once(&plinth_infrastructure::di::registrars::INFRASTRUCTURE_MODULE)
            .chain(modules.iter().copied()),
    )
    .unwrap();
    let engine = Engine::new(config, scanner);
    assert_eq!(engine.phase(), EnginePhase::Uninitialized);
    engine
}
