//! Collaborator ports
//!
//! The resolver never inspects types itself. It asks a [`TypeCompatibility`]
//! oracle whether a binding is valid and an [`Activator`] how to build an
//! implementation.

pub mod activation;
pub mod compatibility;

pub use activation::{Activator, Arguments, Constructor, Factory, Parameter, Provision};
pub use compatibility::TypeCompatibility;
