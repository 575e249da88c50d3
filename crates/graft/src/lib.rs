//! # Graft
//!
//! A dependency-resolution engine. Capabilities (abstract contracts) are
//! bound to implementations with a lifetime and an alternative id; the
//! resolver builds object graphs from those bindings, specializing unbound
//! generic bindings on demand and rejecting cycles.
//!
//! ## Example
//!
//! ```ignore
//! use graft::{AppConfig, CapabilityId, ConstructorSpec, ContainerBuilder, Instance, TypeDeclaration};
//!
//! struct MyRepository;
//!
//! let container = ContainerBuilder::new(AppConfig::default())
//!     .declare(TypeDeclaration::interface("IRepository"))
//!     .declare(
//!         TypeDeclaration::concrete("MyRepository")
//!             .implements(CapabilityId::named("IRepository"))
//!             .constructor(ConstructorSpec::new(|_| Ok(Instance::new(MyRepository)))),
//!     )
//!     .bind(CapabilityId::named("IRepository"), CapabilityId::named("MyRepository"))
//!     .build()?;
//!
//! let repository = container.resolve_as::<MyRepository>(&CapabilityId::named("IRepository"))?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability identifiers, bindings, instances, ports and errors
//! - `application` - binding registry and resolver
//! - `providers` - the explicit type catalog implementing the ports
//! - `infrastructure` - configuration, logging and the container composition root

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use graft_domain::*;
}

/// Application layer - registry and resolver
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use graft_application::*;
}

/// Providers - the type catalog
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use graft_providers::*;
}

/// Infrastructure layer - config, logging and container bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use graft_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{BindingRegistry, Registration, Resolver};
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::di::{Container, ContainerBuilder};
pub use infrastructure::logging::init_logging;
pub use providers::{ConstructorSpec, TypeCatalog, TypeDeclaration, TypeKind};
