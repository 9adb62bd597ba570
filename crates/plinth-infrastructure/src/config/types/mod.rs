//! Configuration types module

pub mod app;
pub mod data;
pub mod discovery;
pub mod logging;
pub mod web;

// Re-export main types
pub use app::{AppConfig, StartupConfig};
pub use data::DataSettings;
pub use discovery::DiscoveryConfig;
pub use logging::LoggingConfig;
pub use web::WebConfig;
