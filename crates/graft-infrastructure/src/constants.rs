//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "graft.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "graft";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GRAFT";

/// Separator between nested keys in environment variables
/// (`GRAFT_RESOLVER__SINGLETON_SCOPE`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "GRAFT_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "graft";
