//! Composition root
//!
//! Wires a [`TypeCatalog`](graft_providers::TypeCatalog), a
//! [`BindingRegistry`](graft_application::BindingRegistry) and a
//! [`Resolver`](graft_application::Resolver) together from an [`AppConfig`](crate::AppConfig).

pub mod bootstrap;

pub use bootstrap::{Container, ContainerBuilder};
