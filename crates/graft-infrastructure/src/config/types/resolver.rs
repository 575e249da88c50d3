//! Resolver configuration types

use graft_domain::{Lifetime, SingletonScope};
use serde::{Deserialize, Serialize};

/// Resolver configuration
///
/// ```toml
/// [resolver]
/// singleton_scope = "implementation"
/// default_lifetime = "prototype"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// What identifies a cached singleton
    pub singleton_scope: SingletonScope,

    /// Lifetime for registrations that don't choose one
    pub default_lifetime: Lifetime,
}
