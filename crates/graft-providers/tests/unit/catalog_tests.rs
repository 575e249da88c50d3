//! Tests for type declarations and ancestry

use graft_domain::{CapabilityId, Error, TypeCompatibility};
use graft_providers::{TypeCatalog, TypeDeclaration, TypeKind};

fn repo_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    for declaration in [
        TypeDeclaration::interface("IRepository"),
        TypeDeclaration::abstract_class("AbstractRepository")
            .implements(CapabilityId::named("IRepository")),
        TypeDeclaration::concrete("MyRepository")
            .implements(CapabilityId::named("AbstractRepository")),
        TypeDeclaration::interface("IService").generic(1),
        TypeDeclaration::concrete("ServiceImpl")
            .generic(1)
            .implements(CapabilityId::closed(
                "IService",
                vec![CapabilityId::param(0)],
            )),
    ] {
        catalog.declare(declaration).expect("unique names");
    }
    catalog
}

#[test]
fn test_duplicate_declaration_rejected() {
    let mut catalog = repo_catalog();
    let result = catalog.declare(TypeDeclaration::concrete("MyRepository"));
    match result {
        Err(Error::DuplicateDeclaration { name }) => assert_eq!(name, "MyRepository"),
        other => panic!("Expected DuplicateDeclaration, got {other:?}"),
    }
    assert_eq!(catalog.len(), 5);
}

#[test]
fn test_declaration_lookup_ignores_type_arguments() {
    let catalog = repo_catalog();
    let closed = CapabilityId::closed("ServiceImpl", vec![CapabilityId::named("IRepository")]);
    let declaration = catalog.declaration(&closed).expect("declared");
    assert_eq!(declaration.kind(), TypeKind::Concrete);
    assert_eq!(declaration.id(), CapabilityId::open("ServiceImpl", 1));
    assert!(catalog.contains("IService"));
    assert!(!catalog.contains("Undeclared"));
}

#[test]
fn test_ancestry_is_transitive() {
    let catalog = repo_catalog();
    let ancestry = catalog.ancestry(&CapabilityId::named("MyRepository"));
    assert_eq!(ancestry.len(), 3);
    assert!(ancestry.contains(&CapabilityId::named("AbstractRepository")));
    assert!(ancestry.contains(&CapabilityId::named("IRepository")));
}

#[test]
fn test_ancestry_substitutes_type_arguments() {
    let catalog = repo_catalog();
    let closed = CapabilityId::closed("ServiceImpl", vec![CapabilityId::named("IRepository")]);
    let ancestry = catalog.ancestry(&closed);
    assert!(ancestry.contains(&CapabilityId::closed(
        "IService",
        vec![CapabilityId::named("IRepository")]
    )));
}

#[test]
fn test_ancestry_of_undeclared_type() {
    let catalog = repo_catalog();
    let undeclared = CapabilityId::named("Undeclared");
    assert_eq!(catalog.ancestry(&undeclared), vec![undeclared]);
}

#[test]
fn test_satisfies_through_abstract_base() {
    let catalog = repo_catalog();
    let my = CapabilityId::named("MyRepository");
    assert!(catalog.satisfies(&my, &CapabilityId::named("IRepository")));
    assert!(catalog.satisfies(&my, &my));
    assert!(!catalog.satisfies(&CapabilityId::named("IRepository"), &my));
}

#[test]
fn test_constructibility() {
    let catalog = repo_catalog();
    assert!(catalog.is_constructible(&CapabilityId::named("MyRepository")));
    assert!(!catalog.is_constructible(&CapabilityId::named("AbstractRepository")));
    assert!(!catalog.is_constructible(&CapabilityId::named("IRepository")));
    assert!(catalog.is_constructible(&CapabilityId::closed(
        "ServiceImpl",
        vec![CapabilityId::named("IRepository")]
    )));
    assert!(!catalog.is_constructible(&CapabilityId::open("ServiceImpl", 2)));
}
