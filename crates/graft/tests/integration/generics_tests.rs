//! Open generic bindings and lifetimes

use graft::{CapabilityId, Lifetime, Registration};

use crate::fixtures::*;

fn open(name: &str) -> CapabilityId {
    CapabilityId::open(name, 1)
}

#[test]
fn test_lifetimes_per_alternative() {
    let container = sample_builder()
        .bind(repository(), named("MyRepository"))
        .register(
            Registration::new(open("IService"), open("ServiceImpl1"))
                .with_lifetime(Lifetime::Singleton)
                .with_alternative_id("1"),
        )
        .register(
            Registration::new(open("IService"), open("ServiceImpl2"))
                .with_lifetime(Lifetime::Prototype)
                .with_alternative_id("2"),
        )
        .build()
        .expect("valid container");
    let request = service_of(repository());

    let single_a = container.resolve_named(&request, "1").expect("resolves");
    let proto_a = container.resolve_named(&request, "2").expect("resolves");
    let single_b = container.resolve_named(&request, "1").expect("resolves");
    let proto_b = container.resolve_named(&request, "2").expect("resolves");

    assert!(single_a.ptr_eq(&single_b));
    assert!(!proto_a.ptr_eq(&proto_b));
    let service = proto_a.downcast_ref::<Service>().expect("Service");
    assert_eq!(service.implementation, "ServiceImpl2");
    assert_eq!(service.type_argument, repository());
}

#[test]
fn test_open_generic_list() {
    let container = sample_builder()
        .bind(repository(), named("MyRepository"))
        .register(Registration::new(open("IService"), open("ServiceImpl1")).with_alternative_id("1"))
        .register(Registration::new(open("IService"), open("ServiceImpl2")).with_alternative_id("2"))
        .build()
        .expect("valid container");

    let services = container
        .resolve_all_as::<Service>(&service_of(repository()))
        .expect("resolves");
    let built: Vec<_> = services.iter().map(|s| s.implementation).collect();
    assert_eq!(built, vec!["ServiceImpl1", "ServiceImpl2"]);
}

#[test]
fn test_provided_parameter_by_id() {
    let container = sample_builder()
        .register(Registration::new(repository(), named("MyRepository")).with_alternative_id("my"))
        .register(Registration::new(repository(), named("SomeRepository")).with_alternative_id("some"))
        .bind(
            service_of(repository()),
            closed("ServiceImpl3", repository()),
        )
        .build()
        .expect("valid container");

    let service = container
        .resolve_as::<Service>(&service_of(repository()))
        .expect("resolves");
    assert_eq!(service.implementation, "ServiceImpl3");
    assert!(service.repository.is::<MyRepository>());
}

#[test]
fn test_specialization_over_concrete_argument() {
    let container = sample_builder()
        .bind(named("SomeRepository"), named("SomeRepository"))
        .bind(open("IService"), open("ServiceImpl1"))
        .build()
        .expect("valid container");

    let service = container
        .resolve_as::<Service>(&service_of(named("SomeRepository")))
        .expect("resolves");
    assert_eq!(service.type_argument, named("SomeRepository"));
    assert!(service.repository.is::<SomeRepository>());
}
