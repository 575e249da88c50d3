//! Resolver
//!
//! Builds object graphs from a frozen [`BindingRegistry`].
//!
//! ## Resolution flow
//!
//! ```text
//! resolve(capability, id?)
//!   │
//!   ├─ direct key?            ──▶ bindings[capability]
//!   ├─ generic definition key? ──▶ bindings[definition] + type arguments
//!   ├─ Sequence(T)?           ──▶ resolve_all(T)
//!   └─ otherwise              ──▶ UnknownCapability
//!   │
//!   ├─ pick binding (ambiguity / alternative id)
//!   ├─ stack.enter(capability)   (cycle check)
//!   ├─ singleton cache or construct via Activator
//!   │     └─ resolve each provided constructor parameter (recursive)
//!   └─ stack.exit()
//! ```
//!
//! A `Resolver` is `Send + Sync`; share it behind an `Arc` to resolve from
//! several threads.

pub mod cache;
pub mod stack;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use graft_domain::{
    Activator, Arguments, Binding, CapabilityId, Constructor, Error, Instance, Lifetime, Result,
    SingletonScope,
};
use tracing::{debug, warn};

use crate::registry::BindingRegistry;

pub use cache::{SingletonCache, SingletonKey};
pub use stack::ResolutionStack;

/// Where a request is served from
enum Target {
    /// The capability itself is registered
    Direct(CapabilityId),
    /// Only the generic definition is registered
    Specialized {
        definition: CapabilityId,
        args: Vec<CapabilityId>,
    },
    /// Collection-of request for an element capability
    Collection(CapabilityId),
}

/// Dependency resolver
pub struct Resolver {
    registry: Arc<BindingRegistry>,
    activator: Arc<dyn Activator>,
    singletons: SingletonCache,
    scope: SingletonScope,
}

impl Resolver {
    /// Freeze `registry` and resolve against it
    pub fn new(registry: BindingRegistry, activator: Arc<dyn Activator>) -> Self {
        Self::from_shared(Arc::new(registry), activator)
    }

    /// Resolve against an already shared registry
    pub fn from_shared(registry: Arc<BindingRegistry>, activator: Arc<dyn Activator>) -> Self {
        Self {
            registry,
            activator,
            singletons: SingletonCache::new(),
            scope: SingletonScope::default(),
        }
    }

    /// Choose what identifies a cached singleton
    pub fn with_singleton_scope(mut self, scope: SingletonScope) -> Self {
        self.scope = scope;
        self
    }

    /// Frozen registry
    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    /// Singleton keying policy
    pub fn singleton_scope(&self) -> SingletonScope {
        self.scope
    }

    /// Resolve one instance of `capability`
    ///
    /// Without an alternative id the capability must have exactly one
    /// binding. A `Sequence(T)` capability that is not registered itself
    /// resolves every binding of `T` (only when no alternative id is given).
    pub fn resolve(
        &self,
        capability: &CapabilityId,
        alternative_id: Option<&str>,
    ) -> Result<Instance> {
        let mut stack = ResolutionStack::new();
        self.resolve_in(&mut stack, capability, alternative_id)
            .inspect_err(|e| warn!(capability = %capability, error = %e, "Resolution failed"))
    }

    /// Resolve every binding of `capability`, in registration order
    pub fn resolve_all(&self, capability: &CapabilityId) -> Result<Vec<Instance>> {
        let mut stack = ResolutionStack::new();
        self.resolve_all_in(&mut stack, capability)
            .inspect_err(|e| warn!(capability = %capability, error = %e, "Resolution failed"))
    }

    /// [`Resolver::resolve`] downcast to `T`
    pub fn resolve_as<T: Any + Send + Sync>(
        &self,
        capability: &CapabilityId,
        alternative_id: Option<&str>,
    ) -> Result<Arc<T>> {
        self.resolve(capability, alternative_id)?.try_downcast::<T>()
    }

    /// [`Resolver::resolve_all`] downcast to `T`
    pub fn resolve_all_as<T: Any + Send + Sync>(
        &self,
        capability: &CapabilityId,
    ) -> Result<Vec<Arc<T>>> {
        self.resolve_all(capability)?
            .iter()
            .map(Instance::try_downcast::<T>)
            .collect()
    }

    /// Whether a singleton carrying `alternative_id` has been constructed
    pub fn is_cached(&self, alternative_id: &str) -> bool {
        self.singletons.contains_alternative(alternative_id)
    }

    /// Number of constructed singletons
    pub fn singleton_count(&self) -> usize {
        self.singletons.len()
    }

    fn locate(&self, capability: &CapabilityId) -> Option<Target> {
        if self.registry.has_binding(capability) {
            return Some(Target::Direct(capability.clone()));
        }
        if let Some(definition) = capability.generic_definition() {
            if self.registry.has_binding(&definition) {
                return Some(Target::Specialized {
                    definition,
                    args: capability.type_arguments().to_vec(),
                });
            }
        }
        capability
            .sequence_element()
            .map(|element| Target::Collection(element.clone()))
    }

    fn resolve_in(
        &self,
        stack: &mut ResolutionStack,
        capability: &CapabilityId,
        alternative_id: Option<&str>,
    ) -> Result<Instance> {
        debug!(capability = %capability, alternative_id = ?alternative_id, depth = stack.depth(), "Resolving");

        let (key, args) = match self.locate(capability) {
            Some(Target::Direct(key)) => (key, None),
            Some(Target::Specialized { definition, args }) => (definition, Some(args)),
            Some(Target::Collection(element)) if alternative_id.is_none() => {
                return self
                    .resolve_all_in(stack, &element)
                    .map(Instance::collection);
            }
            _ => return Err(Error::unknown_capability(capability.clone())),
        };

        let binding = select_binding(&key, self.registry.lookup(&key)?, alternative_id)?;

        stack.enter(&key)?;
        let result = self.materialize(stack, binding, args.as_deref());
        stack.exit();
        result
    }

    fn resolve_all_in(
        &self,
        stack: &mut ResolutionStack,
        capability: &CapabilityId,
    ) -> Result<Vec<Instance>> {
        debug!(capability = %capability, depth = stack.depth(), "Resolving all");

        let (key, args) = match self.locate(capability) {
            Some(Target::Direct(key)) => (key, None),
            Some(Target::Specialized { definition, args }) => (definition, Some(args)),
            _ => return Err(Error::unknown_capability(capability.clone())),
        };
        let bindings = self.registry.lookup(&key)?;

        stack.enter(&key)?;
        let result = bindings
            .iter()
            .map(|binding| self.materialize(stack, binding, args.as_deref()))
            .collect::<Result<Vec<_>>>();
        stack.exit();
        result
    }

    /// Specialize an open binding if needed, then apply its lifetime
    fn materialize(
        &self,
        stack: &mut ResolutionStack,
        binding: &Binding,
        args: Option<&[CapabilityId]>,
    ) -> Result<Instance> {
        match args {
            Some(args) => self.obtain(stack, &binding.specialize(args)?),
            None => self.obtain(stack, binding),
        }
    }

    fn obtain(&self, stack: &mut ResolutionStack, binding: &Binding) -> Result<Instance> {
        match binding.lifetime() {
            Lifetime::Prototype => self.construct(stack, binding),
            Lifetime::Singleton => {
                let key = SingletonKey::for_binding(binding, self.scope);
                self.singletons
                    .get_or_try_insert(key, || self.construct(stack, binding))
            }
        }
    }

    fn construct(&self, stack: &mut ResolutionStack, binding: &Binding) -> Result<Instance> {
        let implementation = binding.implementation();
        let constructors = self.activator.constructors(implementation)?;
        let constructor = select_constructor(&constructors).ok_or_else(|| {
            Error::no_public_constructor(implementation.clone(), binding.alternative_id())
        })?;

        let mut values = Vec::with_capacity(constructor.arity());
        for parameter in &constructor.parameters {
            let value = match &parameter.provision {
                Some(provision) => Some(self.resolve_in(
                    stack,
                    &parameter.capability,
                    provision.alternative_id.as_deref(),
                )?),
                None => None,
            };
            values.push(value);
        }

        debug!(
            implementation = %implementation,
            alternative_id = binding.alternative_id(),
            lifetime = %binding.lifetime(),
            "Constructing"
        );
        constructor.invoke(Arguments::new(
            values,
            implementation.type_arguments().to_vec(),
        ))
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .field("scope", &self.scope)
            .field("singletons", &self.singletons.len())
            .finish_non_exhaustive()
    }
}

/// Pick the binding a request refers to
fn select_binding<'a>(
    capability: &CapabilityId,
    bindings: &'a [Binding],
    alternative_id: Option<&str>,
) -> Result<&'a Binding> {
    match alternative_id {
        None if bindings.len() > 1 => Err(Error::ambiguous_binding(
            capability.clone(),
            bindings.len(),
        )),
        None => bindings
            .first()
            .ok_or_else(|| Error::unknown_capability(capability.clone())),
        Some(id) => bindings
            .iter()
            .find(|binding| binding.alternative_id() == id)
            .ok_or_else(|| Error::unregistered_alternative(capability.clone(), id)),
    }
}

/// Widest public constructor; the first one wins a tie
fn select_constructor(constructors: &[Constructor]) -> Option<&Constructor> {
    constructors
        .iter()
        .filter(|constructor| constructor.public)
        .fold(None, |best: Option<&Constructor>, candidate| match best {
            Some(best) if best.arity() >= candidate.arity() => Some(best),
            _ => Some(candidate),
        })
}
