//! Type compatibility port

use crate::value_objects::CapabilityId;

/// Decides whether an implementation can serve a capability
///
/// Consulted by the binding registry when a binding is registered.
/// Implementations must be read-only and side-effect free.
pub trait TypeCompatibility: Send + Sync {
    /// Whether `candidate` satisfies `capability`
    ///
    /// For a non-generic capability the candidate must derive from or
    /// implement it, directly or transitively. For a generic capability only
    /// the generic shape is compared: the capability's unbound definition must
    /// appear among the unbound definitions of the candidate's ancestry.
    fn satisfies(&self, candidate: &CapabilityId, capability: &CapabilityId) -> bool;

    /// Whether `candidate` can be instantiated at all (not abstract, not an interface)
    fn is_constructible(&self, candidate: &CapabilityId) -> bool;
}
