//! Shared catalog for registry and resolver tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use graft_application::{BindingRegistry, Resolver};
use graft_domain::{Arguments, CapabilityId, Error, Instance};
use graft_providers::{ConstructorSpec, TypeCatalog, TypeDeclaration};

pub fn named(name: &str) -> CapabilityId {
    CapabilityId::named(name)
}

pub fn service_of(arg: CapabilityId) -> CapabilityId {
    CapabilityId::closed("IService", vec![arg])
}

pub fn service_impl_of(arg: CapabilityId) -> CapabilityId {
    CapabilityId::closed("ServiceImpl", vec![arg])
}

#[derive(Debug)]
pub struct MyRepository;

#[derive(Debug)]
pub struct SomeRepository;

/// Generic service holding whatever its type argument resolved to
#[derive(Debug)]
pub struct ServiceImpl {
    pub type_argument: CapabilityId,
    pub repository: Option<Instance>,
}

/// Records which constructor built it
#[derive(Debug)]
pub struct Widget {
    pub constructor: &'static str,
    pub primary: Option<Instance>,
    pub secondary: Option<Instance>,
}

#[derive(Debug)]
pub struct Counted {
    pub serial: usize,
}

fn unit<T: Send + Sync + 'static>(make: fn() -> T) -> ConstructorSpec {
    ConstructorSpec::new(move |_: Arguments| Ok(Instance::new(make())))
}

/// Catalog of repositories, a generic service, cyclic classes and oddities
///
/// `constructions` counts every `Counted` built.
pub fn catalog_with_counter(constructions: Arc<AtomicUsize>) -> Arc<TypeCatalog> {
    let mut catalog = TypeCatalog::new();
    let declarations = vec![
        TypeDeclaration::interface("IRepository"),
        TypeDeclaration::abstract_class("AbstractRepository").implements(named("IRepository")),
        TypeDeclaration::concrete("MyRepository")
            .implements(named("AbstractRepository"))
            .constructor(unit(|| MyRepository)),
        TypeDeclaration::concrete("SomeRepository")
            .implements(named("IRepository"))
            .constructor(unit(|| SomeRepository)),
        TypeDeclaration::interface("IService").generic(1),
        TypeDeclaration::concrete("ServiceImpl")
            .generic(1)
            .implements(service_of(CapabilityId::param(0)))
            .constructor(
                ConstructorSpec::new(|args: Arguments| {
                    Ok(Instance::new(ServiceImpl {
                        type_argument: args.type_arguments()[0].clone(),
                        repository: args.instance(0).cloned(),
                    }))
                })
                .provided(CapabilityId::param(0)),
            ),
        TypeDeclaration::concrete("SelfDependent")
            .constructor(unit(|| ()).provided(named("SelfDependent"))),
        TypeDeclaration::concrete("Class1").constructor(unit(|| ()).provided(named("Class2"))),
        TypeDeclaration::concrete("Class2").constructor(unit(|| ()).provided(named("Class1"))),
        TypeDeclaration::concrete("Widget")
            .constructor(ConstructorSpec::new(|_: Arguments| {
                Ok(Instance::new(Widget {
                    constructor: "narrow",
                    primary: None,
                    secondary: None,
                }))
            }))
            .constructor(
                ConstructorSpec::new(|args: Arguments| {
                    Ok(Instance::new(Widget {
                        constructor: "wide",
                        primary: args.instance(0).cloned(),
                        secondary: args.instance(1).cloned(),
                    }))
                })
                .provided_named(named("IRepository"), "some")
                .unprovided(named("IRepository")),
            )
            .constructor(
                unit(|| ())
                    .unprovided(named("IRepository"))
                    .unprovided(named("IRepository"))
                    .unprovided(named("IRepository"))
                    .private(),
            ),
        TypeDeclaration::concrete("Hidden").constructor(unit(|| ()).private()),
        TypeDeclaration::concrete("Failing").constructor(ConstructorSpec::new(|_: Arguments| {
            Err(Error::activation("factory refused"))
        })),
        TypeDeclaration::concrete("NeedsFailing")
            .constructor(unit(|| ()).provided(named("Failing"))),
        TypeDeclaration::concrete("Counted").constructor(ConstructorSpec::new(
            move |_: Arguments| {
                let serial = constructions.fetch_add(1, Ordering::SeqCst);
                Ok(Instance::new(Counted { serial }))
            },
        )),
    ];
    for declaration in declarations {
        catalog.declare(declaration).expect("unique type names");
    }
    Arc::new(catalog)
}

pub fn catalog() -> Arc<TypeCatalog> {
    catalog_with_counter(Arc::new(AtomicUsize::new(0)))
}

pub fn registry(catalog: &Arc<TypeCatalog>) -> BindingRegistry {
    BindingRegistry::new(catalog.clone())
}

pub fn resolver(catalog: &Arc<TypeCatalog>, registry: BindingRegistry) -> Resolver {
    Resolver::new(registry, catalog.clone())
}
