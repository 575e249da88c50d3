//! Binding registry
//!
//! Stores bindings keyed by capability, validated against a
//! [`TypeCompatibility`] oracle at registration time.
//!
//! ## Usage
//!
//! ```ignore
//! let mut registry = BindingRegistry::new(catalog.clone());
//! registry.register_default(CapabilityId::named("IRepository"), CapabilityId::named("MyRepository"))?;
//! registry.register(
//!     CapabilityId::open("IService", 1),
//!     CapabilityId::open("ServiceImpl", 1),
//!     Lifetime::Prototype,
//!     "svc",
//! )?;
//! ```
//!
//! The registry is mutable only while it is owned. Handing it to a
//! `Resolver` freezes it.

pub mod registration;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use graft_domain::{Binding, CapabilityId, Error, Lifetime, Result, TypeCompatibility};
use tracing::debug;

pub use registration::Registration;

/// Ordered bindings per capability
pub struct BindingRegistry {
    oracle: Arc<dyn TypeCompatibility>,
    bindings: HashMap<CapabilityId, Vec<Binding>>,
    order: Vec<CapabilityId>,
}

impl BindingRegistry {
    /// Create an empty registry validated by `oracle`
    pub fn new(oracle: Arc<dyn TypeCompatibility>) -> Self {
        Self {
            oracle,
            bindings: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a binding
    ///
    /// # Errors
    ///
    /// - `InvalidBinding` when the implementation is not constructible, does
    ///   not satisfy the capability, or mixes unbound and closed shapes
    /// - `DuplicateBinding` when the pair is already registered
    pub fn register<S: Into<String>>(
        &mut self,
        capability: CapabilityId,
        implementation: CapabilityId,
        lifetime: Lifetime,
        alternative_id: S,
    ) -> Result<()> {
        self.validate(&capability, &implementation)?;

        let alternative_id = alternative_id.into();
        debug!(
            capability = %capability,
            implementation = %implementation,
            lifetime = %lifetime,
            alternative_id = %alternative_id,
            "Registering binding"
        );

        let binding = Binding::new(implementation, lifetime, alternative_id);
        match self.bindings.get_mut(&capability) {
            Some(existing) => existing.push(binding),
            None => {
                self.order.push(capability.clone());
                self.bindings.insert(capability, vec![binding]);
            }
        }
        Ok(())
    }

    /// Register a singleton under the implementation's name
    pub fn register_default(
        &mut self,
        capability: CapabilityId,
        implementation: CapabilityId,
    ) -> Result<()> {
        self.add(Registration::new(capability, implementation))
    }

    /// Register with an explicit lifetime under the implementation's name
    pub fn register_with_lifetime(
        &mut self,
        capability: CapabilityId,
        implementation: CapabilityId,
        lifetime: Lifetime,
    ) -> Result<()> {
        self.add(Registration::new(capability, implementation).with_lifetime(lifetime))
    }

    /// Register a singleton under an explicit alternative id
    pub fn register_named<S: Into<String>>(
        &mut self,
        capability: CapabilityId,
        implementation: CapabilityId,
        alternative_id: S,
    ) -> Result<()> {
        self.add(Registration::new(capability, implementation).with_alternative_id(alternative_id))
    }

    /// Register a [`Registration`], filling unset fields with defaults
    pub fn add(&mut self, registration: Registration) -> Result<()> {
        let alternative_id = registration.effective_alternative_id();
        let lifetime = registration.lifetime.unwrap_or_default();
        self.register(
            registration.capability,
            registration.implementation,
            lifetime,
            alternative_id,
        )
    }

    /// Bindings registered for `capability`, in registration order
    pub fn lookup(&self, capability: &CapabilityId) -> Result<&[Binding]> {
        self.bindings
            .get(capability)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unknown_capability(capability.clone()))
    }

    /// Whether any binding exists for exactly `capability`
    pub fn has_binding(&self, capability: &CapabilityId) -> bool {
        self.bindings.contains_key(capability)
    }

    /// Registered capabilities in first-registration order
    pub fn capabilities(&self) -> impl Iterator<Item = &CapabilityId> {
        self.order.iter()
    }

    /// Number of registered capabilities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn validate(&self, capability: &CapabilityId, implementation: &CapabilityId) -> Result<()> {
        let invalid = |reason: &str| {
            Err(Error::invalid_binding(
                capability.clone(),
                implementation.clone(),
                reason,
            ))
        };

        if !self.oracle.is_constructible(implementation) {
            return invalid("implementation can't be abstract, an interface or undeclared");
        }
        match (capability.is_open(), implementation.is_open()) {
            (false, true) => {
                return invalid("an unbound implementation needs an unbound capability");
            }
            (true, false) => {
                return invalid("an unbound capability needs an unbound implementation");
            }
            (true, true) if capability.arity() != implementation.arity() => {
                return invalid("capability and implementation arity differ");
            }
            _ => {}
        }
        if !self.oracle.satisfies(implementation, capability) {
            return invalid("implementation must inherit or implement the capability");
        }

        let duplicate = self.bindings.get(capability).is_some_and(|existing| {
            existing
                .iter()
                .any(|binding| binding.implementation() == implementation)
        });
        if duplicate {
            return Err(Error::duplicate_binding(
                capability.clone(),
                implementation.clone(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for BindingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for capability in &self.order {
            map.entry(capability, &self.bindings[capability]);
        }
        map.finish()
    }
}
