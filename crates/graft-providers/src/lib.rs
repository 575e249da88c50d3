//! # Graft Providers
//!
//! Implementations of the collaborator ports declared in `graft-domain`.
//!
//! | Provider | Ports |
//! |----------|-------|
//! | [`catalog::TypeCatalog`] | `TypeCompatibility`, `Activator` |

pub mod catalog;

pub use catalog::{ConstructorSpec, TypeCatalog, TypeDeclaration, TypeKind};
