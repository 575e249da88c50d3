//! Registration, lookup and collection scenarios

use std::sync::Arc;

use graft::{ConfigLoader, Error, Lifetime, Registration};
use tempfile::TempDir;

use crate::fixtures::*;

#[test]
fn test_resolve_simple_and_closed_generic() {
    let container = sample_builder()
        .bind(repository(), named("MyRepository"))
        .bind(
            service_of(repository()),
            closed("ServiceImpl1", repository()),
        )
        .build()
        .expect("valid container");

    let repo = container.resolve(&repository()).expect("resolves");
    assert!(repo.is::<MyRepository>());

    let service = container
        .resolve_as::<Service>(&service_of(repository()))
        .expect("resolves");
    assert_eq!(service.implementation, "ServiceImpl1");
    assert!(service.repository.ptr_eq(&repo));
}

#[test]
fn test_indirect_interface() {
    let container = sample_builder()
        .bind(repository(), named("MyRepository"))
        .bind(named("IBaseService"), closed("ServiceImpl1", repository()))
        .build()
        .expect("IService<T> derives from IBaseService");

    let service = container
        .resolve_as::<Service>(&named("IBaseService"))
        .expect("resolves");
    assert_eq!(service.implementation, "ServiceImpl1");
    assert_eq!(service.type_argument, repository());
}

#[test]
fn test_list_of_dependencies() {
    let container = sample_builder()
        .register(Registration::new(repository(), named("MyRepository")).with_alternative_id("1"))
        .register(
            Registration::new(repository(), named("SomeRepository")).with_alternative_id("2"),
        )
        .build()
        .expect("valid container");

    let list = container
        .resolve(&graft::CapabilityId::sequence(repository()))
        .expect("collection fallback");
    let items = list.as_collection().expect("collection");
    assert_eq!(items.len(), 2);
    assert!(items[0].is::<MyRepository>());
    assert!(items[1].is::<SomeRepository>());
}

#[test]
fn test_collection_registered_as_dependency() {
    let container = sample_builder()
        .bind(
            graft::CapabilityId::sequence(repository()),
            named("RepositoryList"),
        )
        .build()
        .expect("valid container");

    let list = container
        .resolve_as::<RepositoryList>(&graft::CapabilityId::sequence(repository()))
        .expect("direct binding");
    assert!(list.items.is_empty());
}

#[test]
fn test_provide_by_id() {
    let container = sample_builder()
        .register(Registration::new(repository(), named("MyRepository")).with_alternative_id("my"))
        .build()
        .expect("valid container");

    let repo = container.resolve_named(&repository(), "my").expect("resolves");
    assert!(repo.is::<MyRepository>());
    assert!(matches!(
        container.resolve_named(&repository(), "wrong"),
        Err(Error::UnregisteredAlternative { .. })
    ));
}

#[test]
fn test_container_from_config_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("graft.toml");
    std::fs::write(&config_path, "[resolver]\ndefault_lifetime = \"prototype\"\n")
        .expect("write config");
    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("GRAFT_INTEGRATION")
        .load()
        .expect("loads");
    assert_eq!(config.resolver.default_lifetime, Lifetime::Prototype);

    let container = sample_builder_with(config)
        .bind(repository(), named("MyRepository"))
        .build()
        .expect("valid container");
    let first = container
        .resolve_as::<MyRepository>(&repository())
        .expect("resolves");
    let second = container
        .resolve_as::<MyRepository>(&repository())
        .expect("resolves");
    assert!(!Arc::ptr_eq(&first, &second));
}
