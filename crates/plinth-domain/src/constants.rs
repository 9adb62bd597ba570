//! Domain layer constants
//!
//! Values that are part of the bootstrap contract itself and are shared by
//! the application, provider and infrastructure crates.

// ============================================================================
// DATA PROVIDER NAMES
// ============================================================================

/// Canonical name of the SQL Server data provider
pub const PROVIDER_SQLSERVER: &str = "sqlserver";

/// Canonical name of the MySQL data provider
pub const PROVIDER_MYSQL: &str = "mysql";

/// Canonical name of the SQL Server Compact data provider
pub const PROVIDER_SQLCE: &str = "sqlce";

// ============================================================================
// AMBIENT CONTEXT CONSTANTS
// ============================================================================

/// Virtual root the fallback HTTP context is rooted at
pub const DEFAULT_VIRTUAL_ROOT: &str = "~/";

/// Prefix marking an application-relative virtual path
pub const VIRTUAL_PATH_PREFIX: &str = "~/";

/// HTTP method reported by the fallback request
pub const FALLBACK_HTTP_METHOD: &str = "GET";

/// Status code reported by a fresh fallback response
pub const FALLBACK_STATUS_CODE: u16 = 200;
