//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Constants shared with providers are defined in `plinth_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "plinth.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "plinth";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PLINTH";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PLINTH_LOG";

/// File stem used for rolling log files when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "plinth";

// ============================================================================
// DISCOVERY CONSTANTS
// ============================================================================

/// Module names matching this pattern are never scanned
pub const DEFAULT_DISCOVERY_SKIP_PATTERN: &str =
    "^std$|^core$|^alloc$|^proc_macro$|^test$|^linkme|^tracing";

/// Only module names matching this pattern are scanned
pub const DEFAULT_DISCOVERY_RESTRICT_PATTERN: &str = ".*";

// ============================================================================
// AMBIENT CONTEXT CONSTANTS
// ============================================================================

/// Physical directory `~/` maps to when none is configured
pub const DEFAULT_PHYSICAL_ROOT: &str = ".";

/// Header carrying the originating client address behind a proxy
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Header carrying the referring page
pub const REFERRER_HEADER: &str = "Referer";

/// File extensions served as static resources
pub const STATIC_RESOURCE_EXTENSIONS: &[&str] = &[
    "axd", "ashx", "bmp", "css", "gif", "htm", "html", "ico", "jpeg", "jpg", "js", "png", "rar",
    "zip", "svg", "woff", "woff2", "map",
];
