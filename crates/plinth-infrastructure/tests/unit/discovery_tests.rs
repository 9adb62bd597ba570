//! Capability scanner tests

use plinth_domain::error::Result;
use plinth_infrastructure::config::{AppConfig, DiscoveryConfig};
use plinth_infrastructure::di::{
    CompositionBuilder, DependencyRegistrar, Implementor, ModuleKind, PluginModule, Registrars,
    StartupTasks, construct_registrar,
};
use plinth_infrastructure::discovery::TypeScanner;

#[derive(Default)]
struct NoopRegistrar;

impl DependencyRegistrar for NoopRegistrar {
    fn register(&self, _: &mut CompositionBuilder, _: &TypeScanner, _: &AppConfig) -> Result<()> {
        Ok(())
    }
}

const fn noop(type_name: &'static str) -> Implementor<dyn DependencyRegistrar> {
    Implementor {
        type_name,
        create: construct_registrar::<NoopRegistrar>,
    }
}

static ZETA: PluginModule = PluginModule {
    name: "zeta_plugin",
    kind: ModuleKind::Application,
    registrars: &[noop("ZetaFirst"), noop("ZetaSecond")],
    startup_tasks: &[],
};

static ALPHA: PluginModule = PluginModule {
    name: "alpha_plugin",
    kind: ModuleKind::Application,
    registrars: &[noop("AlphaOnly")],
    startup_tasks: &[],
};

static FRAMEWORK: PluginModule = PluginModule {
    name: "framework_internals",
    kind: ModuleKind::System,
    registrars: &[noop("Internal")],
    startup_tasks: &[],
};

static GENERATED: PluginModule = PluginModule {
    name: "generated_proxy",
    kind: ModuleKind::Dynamic,
    registrars: &[noop("Generated")],
    startup_tasks: &[],
};

static ZETA_AGAIN: PluginModule = PluginModule {
    name: "zeta_plugin",
    kind: ModuleKind::Application,
    registrars: &[],
    startup_tasks: &[],
};

fn names(scanner: &TypeScanner) -> Vec<&'static str> {
    scanner
        .find_implementors::<Registrars>()
        .iter()
        .map(|i| i.type_name)
        .collect()
}

#[test]
fn test_system_and_dynamic_modules_are_not_scanned() {
    let scanner = TypeScanner::new([&ZETA, &FRAMEWORK, &GENERATED, &ALPHA]).unwrap();

    let modules: Vec<_> = scanner.modules().iter().map(|m| m.name).collect();
    assert_eq!(modules, ["alpha_plugin", "zeta_plugin"]);
    assert!(!names(&scanner).contains(&"Internal"));
    assert!(!names(&scanner).contains(&"Generated"));
}

#[test]
fn test_discovery_order_is_module_name_then_declaration() {
    let forward = TypeScanner::new([&ALPHA, &ZETA]).unwrap();
    let reverse = TypeScanner::new([&ZETA, &ALPHA]).unwrap();

    assert_eq!(names(&forward), ["AlphaOnly", "ZetaFirst", "ZetaSecond"]);
    assert_eq!(names(&forward), names(&reverse));
}

#[test]
fn test_zero_implementors_is_valid() {
    let scanner = TypeScanner::new([&ALPHA, &ZETA]).unwrap();
    assert!(scanner.find_implementors::<StartupTasks>().is_empty());

    let empty = TypeScanner::new([]).unwrap();
    assert!(empty.find_implementors::<Registrars>().is_empty());
}

#[test]
fn test_duplicate_module_names_fail_discovery() {
    let err = TypeScanner::new([&ZETA, &ZETA_AGAIN]).unwrap_err();
    assert!(matches!(err, plinth_domain::Error::Discovery { .. }));
    assert!(err.to_string().contains("zeta_plugin"));
}

#[test]
fn test_skip_pattern_filters_modules() {
    let filters = DiscoveryConfig {
        skip_pattern: "^zeta".to_string(),
        restrict_pattern: ".*".to_string(),
    };
    let scanner = TypeScanner::new([&ALPHA, &ZETA])
        .unwrap()
        .with_filters(&filters)
        .unwrap();

    assert_eq!(names(&scanner), ["AlphaOnly"]);
}

#[test]
fn test_restrict_pattern_filters_modules() {
    let filters = DiscoveryConfig {
        skip_pattern: "^$".to_string(),
        restrict_pattern: "^zeta_".to_string(),
    };
    let scanner = TypeScanner::new([&ALPHA, &ZETA])
        .unwrap()
        .with_filters(&filters)
        .unwrap();

    assert_eq!(names(&scanner), ["ZetaFirst", "ZetaSecond"]);
}

#[test]
fn test_invalid_filter_pattern_is_configuration_error() {
    let filters = DiscoveryConfig {
        skip_pattern: "([".to_string(),
        ..DiscoveryConfig::default()
    };
    let err = TypeScanner::new([&ALPHA])
        .unwrap()
        .with_filters(&filters)
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_linked_modules_include_infrastructure() {
    let scanner = TypeScanner::linked()
        .unwrap()
        .with_filters(&DiscoveryConfig::default())
        .unwrap();

    assert!(
        scanner
            .modules()
            .iter()
            .any(|m| m.name == "plinth_infrastructure")
    );
    let registrars = names(&scanner);
    assert!(registrars.contains(&"AmbientContextRegistrar"));
    assert!(registrars.contains(&"DataProviderRegistrar"));
}
