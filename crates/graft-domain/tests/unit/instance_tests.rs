//! Unit tests for type-erased instances

use graft_domain::{Error, Instance};

#[derive(Debug, PartialEq)]
struct Repository {
    name: &'static str,
}

#[test]
fn test_downcast_to_original_type() {
    let instance = Instance::new(Repository { name: "main" });

    assert!(instance.is::<Repository>());
    assert_eq!(instance.downcast_ref::<Repository>().map(|r| r.name), Some("main"));
    assert!(instance.downcast::<String>().is_none());
    assert!(instance.type_name().ends_with("Repository"));
}

#[test]
fn test_clones_share_identity() {
    let first = Instance::new(Repository { name: "a" });
    let clone = first.clone();
    let other = Instance::new(Repository { name: "a" });

    assert!(first.ptr_eq(&clone));
    assert!(!first.ptr_eq(&other));
}

#[test]
fn test_try_downcast_reports_types() {
    let instance = Instance::new(1_u8);
    match instance.try_downcast::<Repository>() {
        Err(Error::TypeMismatch { expected, actual }) => {
            assert!(expected.ends_with("Repository"));
            assert_eq!(actual, "u8");
        }
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_collection_items() {
    let items = vec![Instance::new(1_u8), Instance::new(2_u8)];
    let collection = Instance::collection(items);
    let view = collection.as_collection().expect("collection");

    assert_eq!(view.len(), 2);
    assert_eq!(view[1].downcast_ref::<u8>(), Some(&2));
    assert!(Instance::new(3_u8).as_collection().is_none());
}
