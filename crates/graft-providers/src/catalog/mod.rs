//! Explicit type catalog
//!
//! Replaces runtime type introspection: the host declares every type the
//! container may touch, and the catalog answers the two collaborator
//! questions the core asks.
//!
//! ```text
//! TypeDeclaration ──declare()──▶ TypeCatalog
//!                                   │
//!                    ┌──────────────┴──────────────┐
//!                    ▼                             ▼
//!            TypeCompatibility               Activator
//!      (satisfies / is_constructible)      (constructors)
//! ```

mod activation;
mod compatibility;
pub mod declaration;

use std::collections::HashMap;

use graft_domain::{CapabilityId, Error, Result};
use tracing::debug;

pub use declaration::{ConstructorSpec, TypeDeclaration, TypeKind};

/// Registry of declared types keyed by name
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<String, TypeDeclaration>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration
    ///
    /// Fails with `DuplicateDeclaration` when the name is already taken.
    pub fn declare(&mut self, declaration: TypeDeclaration) -> Result<()> {
        if self.types.contains_key(declaration.name()) {
            return Err(Error::duplicate_declaration(declaration.name()));
        }
        debug!(
            name = declaration.name(),
            kind = ?declaration.kind(),
            arity = declaration.arity(),
            "Declared type"
        );
        self.types.insert(declaration.name().to_string(), declaration);
        Ok(())
    }

    /// Builder-style [`TypeCatalog::declare`]
    pub fn with(mut self, declaration: TypeDeclaration) -> Result<Self> {
        self.declare(declaration)?;
        Ok(self)
    }

    /// Declaration of the type `id` refers to
    pub fn declaration(&self, id: &CapabilityId) -> Option<&TypeDeclaration> {
        self.types.get(id.name())
    }

    /// Whether a type with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of declared types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// `candidate` plus every transitive parent
    ///
    /// Parents of a closed instantiation are substituted with its type
    /// arguments, so `ServiceImpl<Repo>` yields `IService<Repo>`. Parents of an
    /// unbound definition keep their placeholders.
    pub fn ancestry(&self, candidate: &CapabilityId) -> Vec<CapabilityId> {
        let mut seen: Vec<CapabilityId> = Vec::new();
        let mut pending = vec![candidate.clone()];

        while let Some(current) = pending.pop() {
            if seen.contains(&current) {
                continue;
            }
            if let Some(declaration) = self.declaration(&current) {
                let args = current.type_arguments();
                pending.extend(declaration.parents().iter().map(|p| p.substitute(args)));
            }
            seen.push(current);
        }

        seen
    }
}
