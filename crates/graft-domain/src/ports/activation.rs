//! Activation port: constructor discovery and invocation
//!
//! An [`Activator`] lists the constructors of an implementation. Each
//! [`Constructor`] describes its parameters and carries the factory that
//! builds the instance once the resolver has produced the arguments.
//!
//! ```text
//! Resolver ──constructors(impl)──▶ Activator
//!    │                                 │
//!    │◀──────── Vec<Constructor> ──────┘
//!    │
//!    ├─ resolve every provided parameter
//!    └─ factory(Arguments) ──▶ Instance
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{CapabilityId, Instance};

/// Builds an instance from resolved arguments
pub type Factory = Arc<dyn Fn(Arguments) -> Result<Instance> + Send + Sync>;

/// Marker requesting that a parameter be resolved by the container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provision {
    /// Alternative id to resolve the parameter with
    pub alternative_id: Option<String>,
}

impl Provision {
    /// Provision resolved without an alternative id
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Provision resolved with the given alternative id
    pub fn named<S: Into<String>>(alternative_id: S) -> Self {
        Self {
            alternative_id: Some(alternative_id.into()),
        }
    }
}

/// Constructor parameter descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Declared parameter type
    pub capability: CapabilityId,
    /// Present when the parameter is injected; absent parameters receive `None`
    pub provision: Option<Provision>,
}

impl Parameter {
    /// Parameter resolved by the container
    pub fn provided(capability: CapabilityId) -> Self {
        Self {
            capability,
            provision: Some(Provision::unnamed()),
        }
    }

    /// Parameter resolved by the container under an alternative id
    pub fn provided_named<S: Into<String>>(capability: CapabilityId, alternative_id: S) -> Self {
        Self {
            capability,
            provision: Some(Provision::named(alternative_id)),
        }
    }

    /// Parameter left at its default (`None`)
    pub fn unprovided(capability: CapabilityId) -> Self {
        Self {
            capability,
            provision: None,
        }
    }

    /// Whether the container resolves this parameter
    pub fn is_provided(&self) -> bool {
        self.provision.is_some()
    }
}

/// A constructor of a concrete implementation
#[derive(Clone)]
pub struct Constructor {
    /// Parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// Non-public constructors are never chosen
    pub public: bool,
    /// Factory invoked with the resolved arguments
    pub factory: Factory,
}

impl Constructor {
    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Run the factory
    pub fn invoke(&self, arguments: Arguments) -> Result<Instance> {
        (self.factory)(arguments)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Arguments handed to a constructor factory
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Vec<Option<Instance>>,
    type_arguments: Vec<CapabilityId>,
}

impl Arguments {
    /// Create an argument list
    pub fn new(values: Vec<Option<Instance>>, type_arguments: Vec<CapabilityId>) -> Self {
        Self {
            values,
            type_arguments,
        }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Concrete type arguments of the implementation being built
    pub fn type_arguments(&self) -> &[CapabilityId] {
        &self.type_arguments
    }

    /// Raw argument at `index`; `None` for unprovided parameters
    pub fn instance(&self, index: usize) -> Option<&Instance> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Argument at `index` as `T`; `Ok(None)` for unprovided parameters
    pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<Option<Arc<T>>> {
        match self.values.get(index) {
            None => Err(Error::activation(format!(
                "argument index {index} out of range ({} arguments)",
                self.values.len()
            ))),
            Some(None) => Ok(None),
            Some(Some(instance)) => instance.try_downcast::<T>().map(Some),
        }
    }

    /// Argument at `index` as `T`, failing when it was not provided
    pub fn required<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        self.get::<T>(index)?.ok_or_else(|| {
            Error::activation(format!("argument {index} was not provided by the container"))
        })
    }
}

/// Lists the constructors of an implementation
pub trait Activator: Send + Sync {
    /// Constructors of the closed `implementation`
    ///
    /// Parameter types are already substituted with the implementation's
    /// type arguments.
    ///
    /// # Errors
    ///
    /// Fails when `implementation` is unknown or cannot be instantiated.
    fn constructors(&self, implementation: &CapabilityId) -> Result<Vec<Constructor>>;
}
