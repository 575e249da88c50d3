//! Container bootstrap
//!
//! ## Architecture
//!
//! ```text
//! AppConfig ─┐
//!            ├─▶ ContainerBuilder ──build()──▶ Container
//! TypeDeclaration* ─┤                              │
//! Registration* ────┘                              └─ Arc<Resolver>
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let container = ContainerBuilder::new(ConfigLoader::new().load()?)
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

use std::any::Any;
use std::sync::Arc;

use graft_application::{BindingRegistry, Registration, Resolver};
use graft_domain::{CapabilityId, Instance, Result};
use graft_providers::{TypeCatalog, TypeDeclaration};
use tracing::info;

use crate::config::AppConfig;

/// Collects declarations and registrations, then builds a [`Container`]
#[derive(Debug)]
pub struct ContainerBuilder {
    config: AppConfig,
    catalog: TypeCatalog,
    declarations: Vec<TypeDeclaration>,
    registrations: Vec<Registration>,
}

impl ContainerBuilder {
    /// Start an empty container configured by `config`
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            catalog: TypeCatalog::new(),
            declarations: Vec::new(),
            registrations: Vec::new(),
        }
    }

    /// Start from an existing catalog
    pub fn with_catalog(mut self, catalog: TypeCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Declare a type
    pub fn declare(mut self, declaration: TypeDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Queue a registration
    ///
    /// Registrations without an explicit lifetime take the configured
    /// default.
    pub fn register(mut self, registration: Registration) -> Self {
        self.registrations.push(registration);
        self
    }

    /// Queue a registration with default lifetime and alternative id
    pub fn bind(self, capability: CapabilityId, implementation: CapabilityId) -> Self {
        self.register(Registration::new(capability, implementation))
    }

    /// Validate everything and freeze the container
    ///
    /// Declarations are added first, so registrations may refer to any of
    /// them regardless of queue order.
    pub fn build(self) -> Result<Container> {
        let Self {
            config,
            mut catalog,
            declarations,
            registrations,
        } = self;

        for declaration in declarations {
            catalog.declare(declaration)?;
        }
        let catalog = Arc::new(catalog);

        let default_lifetime = config.resolver.default_lifetime;
        let mut registry = BindingRegistry::new(catalog.clone());
        for registration in registrations {
            registry.add(registration.or_lifetime(default_lifetime))?;
        }

        info!(
            types = catalog.len(),
            capabilities = registry.len(),
            singleton_scope = ?config.resolver.singleton_scope,
            default_lifetime = %default_lifetime,
            "Container built"
        );

        let resolver =
            Resolver::new(registry, catalog).with_singleton_scope(config.resolver.singleton_scope);
        Ok(Container {
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        })
    }
}

/// Frozen container, cheap to clone and share across threads
#[derive(Debug, Clone)]
pub struct Container {
    resolver: Arc<Resolver>,
    config: Arc<AppConfig>,
}

impl Container {
    /// Configuration the container was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Underlying resolver
    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    /// Resolve the single binding of `capability`
    pub fn resolve(&self, capability: &CapabilityId) -> Result<Instance> {
        self.resolver.resolve(capability, None)
    }

    /// Resolve the binding of `capability` registered under `alternative_id`
    pub fn resolve_named(&self, capability: &CapabilityId, alternative_id: &str) -> Result<Instance> {
        self.resolver.resolve(capability, Some(alternative_id))
    }

    /// Resolve every binding of `capability`, in registration order
    pub fn resolve_all(&self, capability: &CapabilityId) -> Result<Vec<Instance>> {
        self.resolver.resolve_all(capability)
    }

    /// [`Container::resolve`] downcast to `T`
    pub fn resolve_as<T: Any + Send + Sync>(&self, capability: &CapabilityId) -> Result<Arc<T>> {
        self.resolver.resolve_as::<T>(capability, None)
    }

    /// [`Container::resolve_named`] downcast to `T`
    pub fn resolve_named_as<T: Any + Send + Sync>(
        &self,
        capability: &CapabilityId,
        alternative_id: &str,
    ) -> Result<Arc<T>> {
        self.resolver.resolve_as::<T>(capability, Some(alternative_id))
    }

    /// [`Container::resolve_all`] downcast to `T`
    pub fn resolve_all_as<T: Any + Send + Sync>(
        &self,
        capability: &CapabilityId,
    ) -> Result<Vec<Arc<T>>> {
        self.resolver.resolve_all_as::<T>(capability)
    }
}
