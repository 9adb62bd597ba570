//! Built-in registration units of the infrastructure crate
//!
//! | Unit | Kind | Order | Installs |
//! |------|------|-------|----------|
//! | [`AmbientContextRegistrar`] | registrar | 0 | scoped ambient roles and `WebHelper` |
//! | [`DataProviderRegistrar`] | registrar | 0 | data settings and the selected `dyn DataProvider` |
//! | [`DataProviderStartupTask`] | startup task | 0 | runs the provider's database initialization |

mod ambient;
mod data;

pub use ambient::AmbientContextRegistrar;
pub use data::{DataProviderRegistrar, DataProviderStartupTask};

use crate::di::plugin::{
    Implementor, ModuleKind, PLUGIN_MODULES, PluginModule, construct_registrar,
    construct_startup_task,
};

/// Plugin module of this crate
#[linkme::distributed_slice(PLUGIN_MODULES)]
pub static INFRASTRUCTURE_MODULE: PluginModule = PluginModule {
    name: "plinth_infrastructure",
    kind: ModuleKind::Application,
    registrars: &[
        Implementor {
            type_name: "AmbientContextRegistrar",
            create: construct_registrar::<AmbientContextRegistrar>,
        },
        Implementor {
            type_name: "DataProviderRegistrar",
            create: construct_registrar::<DataProviderRegistrar>,
        },
    ],
    startup_tasks: &[Implementor {
        type_name: "DataProviderStartupTask",
        create: construct_startup_task::<DataProviderStartupTask>,
    }],
};
