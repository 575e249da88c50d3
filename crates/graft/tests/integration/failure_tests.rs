//! Cycles, missing dependencies and rejected registrations

use graft::{CapabilityId, Error, Registration};

use crate::fixtures::*;

#[test]
fn test_self_dependency() {
    let container = sample_builder()
        .bind(named("SelfDependent"), named("SelfDependent"))
        .build()
        .expect("valid container");
    assert!(matches!(
        container.resolve(&named("SelfDependent")),
        Err(Error::CyclicDependency { .. })
    ));
}

#[test]
fn test_mutual_dependency_from_either_side() {
    let container = sample_builder()
        .bind(named("Class1"), named("Class1"))
        .bind(named("Class2"), named("Class2"))
        .build()
        .expect("valid container");

    for start in ["Class1", "Class2"] {
        match container.resolve(&named(start)) {
            Err(Error::CyclicDependency { capability, chain }) => {
                assert_eq!(capability, named(start));
                assert_eq!(chain.len(), 2);
                assert_eq!(chain[0], named(start));
            }
            other => panic!("Expected CyclicDependency, got {other:?}"),
        }
    }
}

#[test]
fn test_implementation_is_not_a_capability() {
    let container = sample_builder()
        .bind(
            service_of(repository()),
            closed("ServiceImpl3", repository()),
        )
        .build()
        .expect("valid container");

    assert!(matches!(
        container.resolve(&closed("ServiceImpl3", repository())),
        Err(Error::UnknownCapability { .. })
    ));
    assert!(matches!(
        container.resolve(&service_of(repository())),
        Err(Error::UnknownCapability { .. })
    ));
}

#[test]
fn test_named_dependency_missing() {
    let container = sample_builder()
        .register(Registration::new(repository(), named("MyRepository")).with_alternative_id("other"))
        .bind(
            service_of(repository()),
            closed("ServiceImpl3", repository()),
        )
        .build()
        .expect("valid container");

    match container.resolve(&service_of(repository())) {
        Err(Error::UnregisteredAlternative { alternative_id, .. }) => {
            assert_eq!(alternative_id, "my");
        }
        other => panic!("Expected UnregisteredAlternative, got {other:?}"),
    }
}

#[test]
fn test_rejected_registrations() {
    let interface = sample_builder()
        .bind(repository(), repository())
        .build();
    assert!(matches!(interface, Err(Error::InvalidBinding { .. })));

    let unrelated = sample_builder()
        .bind(named("IBaseService"), named("MyRepository"))
        .build();
    assert!(matches!(unrelated, Err(Error::InvalidBinding { .. })));

    let open_to_closed = sample_builder()
        .bind(
            CapabilityId::open("IService", 1),
            closed("ServiceImpl1", repository()),
        )
        .build();
    assert!(matches!(open_to_closed, Err(Error::InvalidBinding { .. })));

    let duplicate = sample_builder()
        .bind(repository(), named("MyRepository"))
        .register(Registration::new(repository(), named("MyRepository")).with_alternative_id("again"))
        .build();
    assert!(matches!(duplicate, Err(Error::DuplicateBinding { .. })));
}

#[test]
fn test_ambiguous_request() {
    let container = sample_builder()
        .register(Registration::new(repository(), named("MyRepository")).with_alternative_id("1"))
        .register(Registration::new(repository(), named("SomeRepository")).with_alternative_id("2"))
        .build()
        .expect("valid container");

    let err = container.resolve(&repository()).expect_err("two bindings");
    assert!(matches!(err, Error::AmbiguousBinding { count: 2, .. }));
    assert!(err.to_string().contains("IRepository"));
}
