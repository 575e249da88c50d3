//! Root configuration type

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ResolverConfig};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Resolver behaviour
    pub resolver: ResolverConfig,
}
