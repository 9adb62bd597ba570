//! # Plinth - Provider Implementations
//!
//! Backend data providers selectable by configuration. Each provider
//! implements the `DataProvider` port from `plinth-domain` and registers
//! itself into the `DATA_PROVIDERS` slice of `plinth-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Data | `DataProvider` | SQL Server, MySQL, SQL Server Compact |
//!
//! ## Feature Flags
//!
//! Each provider can be enabled/disabled via feature flags for minimal builds:
//!
//! ```toml
//! [dependencies]
//! plinth-providers = { version = "0.1", default-features = false, features = ["mysql"] }
//! ```

pub use plinth_domain::error::{Error, Result};
pub use plinth_domain::ports::DataProvider;

/// Process-wide default connection factory
pub mod connection;

/// Data provider implementations
pub mod data;

pub use connection::{ConnectionFactory, default_connection_factory};
#[cfg(feature = "mysql")]
pub use data::MySqlDataProvider;
#[cfg(feature = "sqlce")]
pub use data::SqlCeDataProvider;
#[cfg(feature = "sqlserver")]
pub use data::SqlServerDataProvider;
