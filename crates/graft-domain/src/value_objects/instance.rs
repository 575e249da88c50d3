//! Type-erased shared instances

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A resolved object
///
/// Clones share the underlying value; [`Instance::ptr_eq`] tells whether two
/// handles point at the same object, which is how singleton identity is
/// observed.
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    /// Wrap a value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap an instance list produced by collection resolution
    pub fn collection(items: Vec<Instance>) -> Self {
        Self::new(items)
    }

    /// Rust type the instance was built from
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the instance holds a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the value as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Shared handle to the value as `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.value.clone().downcast::<T>().ok()
    }

    /// Like [`Instance::downcast`], failing with `TypeMismatch`
    pub fn try_downcast<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        self.downcast::<T>()
            .ok_or_else(|| Error::type_mismatch(std::any::type_name::<T>(), self.type_name))
    }

    /// Items of a collection instance
    pub fn as_collection(&self) -> Option<&[Instance]> {
        self.downcast_ref::<Vec<Instance>>().map(Vec::as_slice)
    }

    /// Whether both handles share one object
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
