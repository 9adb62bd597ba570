//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{DataSettings, DiscoveryConfig, LoggingConfig, WebConfig};

/// Startup task configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Skip discovery and execution of startup tasks entirely
    pub ignore_startup_tasks: bool,
}

/// Main application configuration
///
/// Produced by [`ConfigLoader`](crate::config::ConfigLoader) before the
/// engine boots and registered as a bootstrap singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Startup task configuration
    pub startup: StartupConfig,

    /// Data provider settings
    pub data: DataSettings,

    /// Plugin module discovery filters
    pub discovery: DiscoveryConfig,

    /// Ambient web context settings
    pub web: WebConfig,
}
