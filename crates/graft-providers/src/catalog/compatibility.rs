use graft_domain::{CapabilityId, TypeCompatibility};

use super::{TypeCatalog, TypeKind};

impl TypeCompatibility for TypeCatalog {
    fn satisfies(&self, candidate: &CapabilityId, capability: &CapabilityId) -> bool {
        match capability.generic_definition() {
            // Generic contracts match on shape only
            Some(definition) => {
                let root = candidate
                    .generic_definition()
                    .unwrap_or_else(|| candidate.clone());
                self.ancestry(&root)
                    .iter()
                    .filter_map(CapabilityId::generic_definition)
                    .any(|ancestor| ancestor == definition)
            }
            None => self.ancestry(candidate).contains(capability),
        }
    }

    fn is_constructible(&self, candidate: &CapabilityId) -> bool {
        self.declaration(candidate).is_some_and(|declaration| {
            declaration.kind() == TypeKind::Concrete && declaration.arity() == candidate.arity()
        })
    }
}
