//! Launcher
//!
//! Everything the binary does, returned as text so callers decide where it
//! goes.

use std::path::PathBuf;

use plinth_application::registry::list_data_providers;
use plinth_domain::error::Result;
use plinth_infrastructure::config::{AppConfig, ConfigLoader};
use plinth_infrastructure::discovery::TypeScanner;
use plinth_infrastructure::engine::{self, BootstrapReport};
use plinth_infrastructure::error_ext::ErrorContext;
use plinth_infrastructure::logging::init_logging;
use tracing::info;

/// What the launcher should do
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit configuration file; default locations are searched otherwise
    pub config_path: Option<PathBuf>,
    /// Force `startup.ignore_startup_tasks` on
    pub skip_startup_tasks: bool,
    /// Only list the discovered plugins
    pub list_plugins: bool,
    /// Only print the effective configuration
    pub print_config: bool,
}

/// Load the configuration the options select
pub fn load_config(options: &LaunchOptions) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &options.config_path {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if options.skip_startup_tasks {
        config.startup.ignore_startup_tasks = true;
    }
    Ok(config)
}

/// Run the launcher and return its output
///
/// Bootstrapping initializes logging and the process-wide engine, so it can
/// succeed once per process. Listing and printing have no side effects.
pub fn run(options: &LaunchOptions) -> Result<String> {
    let config = load_config(options)?;

    if options.print_config {
        return toml::to_string_pretty(&config).context("Failed to render configuration");
    }

    let scanner = TypeScanner::linked()?.with_filters(&config.discovery)?;
    if options.list_plugins {
        return Ok(describe_plugins(&scanner));
    }

    init_logging(&config.logging)?;
    let report = engine::initialize(config, scanner)?;
    info!(phase = %report.phase, "Plinth ready");
    Ok(describe_report(&report))
}

/// Discovered modules with their units, then the registered data providers
pub fn describe_plugins(scanner: &TypeScanner) -> String {
    let mut lines = vec!["Plugin modules:".to_string()];
    for module in scanner.modules() {
        lines.push(format!("  {}", module.name));
        lines.extend(
            module
                .registrars
                .iter()
                .map(|unit| format!("    registrar    {}", unit.type_name)),
        );
        lines.extend(
            module
                .startup_tasks
                .iter()
                .map(|task| format!("    startup task {}", task.type_name)),
        );
    }

    lines.push("Data providers:".to_string());
    let mut providers = list_data_providers();
    providers.sort_unstable();
    lines.extend(
        providers
            .into_iter()
            .map(|(name, description)| format!("  {name:<10} {description}")),
    );
    lines.join("\n") + "\n"
}

/// Human-readable summary of a bootstrap
pub fn describe_report(report: &BootstrapReport) -> String {
    let mut lines = vec![format!("Engine phase: {}", report.phase), "Registrars:".to_string()];
    lines.extend(
        report
            .registrars
            .iter()
            .enumerate()
            .map(|(i, name)| format!("  {}. {name}", i + 1)),
    );
    match &report.startup_tasks {
        Some(tasks) => {
            lines.push("Startup tasks:".to_string());
            lines.extend(
                tasks
                    .iter()
                    .enumerate()
                    .map(|(i, name)| format!("  {}. {name}", i + 1)),
            );
        }
        None => lines.push("Startup tasks: skipped".to_string()),
    }
    lines.join("\n") + "\n"
}
