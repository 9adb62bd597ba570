//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for backend providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Selector queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = mysql" → MySqlDataProvider   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in plinth-providers)
//!
//! ```ignore
//! use plinth_application::registry::{DataProviderEntry, DATA_PROVIDERS};
//!
//! #[linkme::distributed_slice(DATA_PROVIDERS)]
//! static MYSQL_PROVIDER: DataProviderEntry = DataProviderEntry {
//!     name: "mysql",
//!     description: "MySQL data provider",
//!     factory: |config| Ok(Arc::new(MySqlDataProvider::from_config(config))),
//! };
//! ```
//!
//! ### Selecting a Provider (in plinth-infrastructure)
//!
//! ```ignore
//! use plinth_application::registry::resolve_data_provider;
//!
//! let config = ProviderConfig::new("MySql", "Server=localhost;Database=site");
//! let provider = resolve_data_provider(&config)?;
//! ```

pub mod data_provider;

pub use data_provider::{
    DATA_PROVIDERS, DataProviderEntry, DataProviderManager, list_data_providers,
    resolve_data_provider, select_data_provider,
};
