//! Builder-style registration requests

use graft_domain::{CapabilityId, Lifetime};

/// A binding waiting to be registered
///
/// Unset fields take registry defaults: the lifetime falls back to
/// [`Lifetime::Singleton`] and the alternative id to the implementation's
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Capability the binding serves
    pub capability: CapabilityId,
    /// Implementation to construct
    pub implementation: CapabilityId,
    /// Lifetime, if chosen explicitly
    pub lifetime: Option<Lifetime>,
    /// Alternative id, if chosen explicitly
    pub alternative_id: Option<String>,
}

impl Registration {
    /// Bind `capability` to `implementation`
    pub fn new(capability: CapabilityId, implementation: CapabilityId) -> Self {
        Self {
            capability,
            implementation,
            lifetime: None,
            alternative_id: None,
        }
    }

    /// Set the lifetime
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Set the alternative id
    pub fn with_alternative_id<S: Into<String>>(mut self, alternative_id: S) -> Self {
        self.alternative_id = Some(alternative_id.into());
        self
    }

    /// Use `lifetime` unless one was chosen explicitly
    pub fn or_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime.get_or_insert(lifetime);
        self
    }

    /// Effective alternative id
    pub fn effective_alternative_id(&self) -> String {
        self.alternative_id
            .clone()
            .unwrap_or_else(|| self.implementation.name().to_string())
    }
}
