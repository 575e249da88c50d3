//! Binding records and lifetime policy

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CapabilityId;
use crate::error::Result;

/// How long a resolved instance lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// One cached instance per singleton key for the resolver's lifetime
    #[default]
    Singleton,
    /// A new instance for every request
    Prototype,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => write!(f, "singleton"),
            Self::Prototype => write!(f, "prototype"),
        }
    }
}

/// What identifies a cached singleton
///
/// `AlternativeId` keys the cache by alternative id alone: every closed
/// instantiation of an open binding that shares an id collapses onto one
/// instance, and two capabilities bound to the same id share it too.
/// `Implementation` additionally keys by the closed implementation, giving
/// each instantiation its own instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingletonScope {
    /// Key by alternative id only
    #[default]
    AlternativeId,
    /// Key by alternative id and closed implementation
    Implementation,
}

/// A registered mapping from a capability to an implementation
///
/// Immutable once created; [`Binding::specialize`] produces a new binding
/// rather than changing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    implementation: CapabilityId,
    lifetime: Lifetime,
    alternative_id: String,
}

impl Binding {
    /// Create a binding
    pub fn new<S: Into<String>>(
        implementation: CapabilityId,
        lifetime: Lifetime,
        alternative_id: S,
    ) -> Self {
        Self {
            implementation,
            lifetime,
            alternative_id: alternative_id.into(),
        }
    }

    /// Implementation constructed for this binding
    pub fn implementation(&self) -> &CapabilityId {
        &self.implementation
    }

    /// Lifetime policy
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Alternative id distinguishing this binding among its siblings
    pub fn alternative_id(&self) -> &str {
        &self.alternative_id
    }

    /// Copy of this binding with the implementation closed over `args`
    pub fn specialize(&self, args: &[CapabilityId]) -> Result<Binding> {
        Ok(Self {
            implementation: self.implementation.make_closed(args)?,
            lifetime: self.lifetime,
            alternative_id: self.alternative_id.clone(),
        })
    }
}
