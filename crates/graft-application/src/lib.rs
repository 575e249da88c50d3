//! # Graft Application Layer
//!
//! Registration and resolution: the part of Graft that turns bindings into
//! object graphs.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | `BindingRegistry`: validated, ordered bindings per capability |
//! | [`resolver`] | `Resolver`: lookup, cycle detection, lifetime cache, construction |
//!
//! ## Dependencies
//!
//! This crate depends only on `graft-domain`. Type knowledge comes in through
//! the `TypeCompatibility` and `Activator` ports.

pub mod registry;
pub mod resolver;

pub use registry::{BindingRegistry, Registration};
pub use resolver::{ResolutionStack, Resolver, SingletonCache, SingletonKey};
