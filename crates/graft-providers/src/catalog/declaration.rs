//! Type declarations
//!
//! A [`TypeDeclaration`] is everything the container needs to know about one
//! type: whether it can be instantiated, how many type parameters it takes,
//! which contracts it derives from and how to build it.
//!
//! ```ignore
//! let service = TypeDeclaration::concrete("ServiceImpl")
//!     .generic(1)
//!     .implements(CapabilityId::closed("IService", vec![CapabilityId::param(0)]))
//!     .constructor(
//!         ConstructorSpec::new(|args| Ok(Instance::new(ServiceImpl::new(args.instance(0).cloned()))))
//!             .provided(CapabilityId::param(0)),
//!     );
//! ```

use std::fmt;
use std::sync::Arc;

use graft_domain::{Arguments, CapabilityId, Factory, Instance, Parameter, Result};

/// Instantiability of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Pure contract, never instantiated
    Interface,
    /// Partial implementation, never instantiated
    Abstract,
    /// Constructible type
    Concrete,
}

/// One constructor of a concrete type
///
/// Parameter types may reference the declaring type's parameters through
/// [`CapabilityId::param`]; they are substituted when a closed instantiation
/// is activated.
#[derive(Clone)]
pub struct ConstructorSpec {
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) public: bool,
    pub(crate) factory: Factory,
}

impl ConstructorSpec {
    /// Public constructor backed by `factory`
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(Arguments) -> Result<Instance> + Send + Sync + 'static,
    {
        Self {
            parameters: Vec::new(),
            public: true,
            factory: Arc::new(factory),
        }
    }

    /// Append a parameter resolved by the container
    pub fn provided(mut self, capability: CapabilityId) -> Self {
        self.parameters.push(Parameter::provided(capability));
        self
    }

    /// Append a parameter resolved by the container under `alternative_id`
    pub fn provided_named<S: Into<String>>(
        mut self,
        capability: CapabilityId,
        alternative_id: S,
    ) -> Self {
        self.parameters
            .push(Parameter::provided_named(capability, alternative_id));
        self
    }

    /// Append a parameter that receives `None`
    pub fn unprovided(mut self, capability: CapabilityId) -> Self {
        self.parameters.push(Parameter::unprovided(capability));
        self
    }

    /// Hide this constructor from the container
    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    /// Declared parameters
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Whether the constructor is public
    pub fn is_public(&self) -> bool {
        self.public
    }
}

impl fmt::Debug for ConstructorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("parameters", &self.parameters)
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Declaration of one type
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub(crate) name: String,
    pub(crate) kind: TypeKind,
    pub(crate) arity: usize,
    pub(crate) parents: Vec<CapabilityId>,
    pub(crate) constructors: Vec<ConstructorSpec>,
}

impl TypeDeclaration {
    fn new<S: Into<String>>(name: S, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            arity: 0,
            parents: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Declare an interface
    pub fn interface<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Declare an abstract class
    pub fn abstract_class<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeKind::Abstract)
    }

    /// Declare a concrete class
    pub fn concrete<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeKind::Concrete)
    }

    /// Make the type generic over `arity` parameters
    pub fn generic(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Add a direct base type or implemented contract
    pub fn implements(mut self, parent: CapabilityId) -> Self {
        self.parents.push(parent);
        self
    }

    /// Add a constructor
    pub fn constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instantiability
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Number of type parameters
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Direct parents, possibly referencing type parameters
    pub fn parents(&self) -> &[CapabilityId] {
        &self.parents
    }

    /// Declared constructors
    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.constructors
    }

    /// Identifier of the declared type (unbound when generic)
    pub fn id(&self) -> CapabilityId {
        if self.arity == 0 {
            CapabilityId::named(&self.name)
        } else {
            CapabilityId::open(&self.name, self.arity)
        }
    }
}
