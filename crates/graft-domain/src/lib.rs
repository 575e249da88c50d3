//! # Graft Domain
//!
//! Core types of the Graft dependency-resolution engine.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | `CapabilityId`, `Binding`, `Lifetime`, `Instance` |
//! | [`ports`] | `TypeCompatibility` and `Activator` collaborator traits |
//! | [`error`] | The error taxonomy shared by registration and resolution |
//!
//! This crate has no knowledge of how bindings are stored or resolved; see
//! `graft-application` for the registry and resolver.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
