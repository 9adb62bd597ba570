//! Data provider implementations
//!
//! | Provider | Stored procedures | Backup | Binary hash length |
//! |----------|-------------------|--------|--------------------|
//! | `sqlserver` | yes | yes | 8000 |
//! | `mysql` | yes | yes | 0 |
//! | `sqlce` | no | no | 0 |

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "sqlce")]
pub mod sqlce;
#[cfg(feature = "sqlserver")]
pub mod sqlserver;

#[cfg(feature = "mysql")]
pub use mysql::MySqlDataProvider;
#[cfg(feature = "sqlce")]
pub use sqlce::SqlCeDataProvider;
#[cfg(feature = "sqlserver")]
pub use sqlserver::SqlServerDataProvider;
