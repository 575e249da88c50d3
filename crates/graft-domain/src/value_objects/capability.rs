//! Capability identifiers and generic shape inspection
//!
//! A [`CapabilityId`] names a type shape: a plain type, an unbound generic
//! definition, a closed generic instantiation, a collection of some element,
//! or a type-parameter placeholder used inside generic declarations.
//!
//! Equality is structural, so `IService<IRepository>` never equals
//! `IService<>`. Lookups that should treat a closed instantiation as an
//! instance of its definition go through [`CapabilityId::generic_definition`].

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Identifier of an abstract contract or a concrete implementation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityId {
    /// Non-generic type
    Named(Arc<str>),
    /// Unbound generic definition with `arity` type parameters
    Open {
        /// Definition name
        name: Arc<str>,
        /// Number of type parameters
        arity: usize,
    },
    /// Generic definition closed over concrete type arguments
    Closed {
        /// Definition name
        name: Arc<str>,
        /// Concrete type arguments, in declaration order
        args: Vec<CapabilityId>,
    },
    /// A collection of every implementation of the element capability
    Sequence(Box<CapabilityId>),
    /// Placeholder for the n-th type parameter of an enclosing declaration
    Param(usize),
}

impl CapabilityId {
    /// Create a non-generic identifier
    pub fn named<S: AsRef<str>>(name: S) -> Self {
        Self::Named(Arc::from(name.as_ref()))
    }

    /// Create an unbound generic definition
    pub fn open<S: AsRef<str>>(name: S, arity: usize) -> Self {
        Self::Open {
            name: Arc::from(name.as_ref()),
            arity,
        }
    }

    /// Create a closed generic instantiation
    pub fn closed<S: AsRef<str>>(name: S, args: Vec<CapabilityId>) -> Self {
        Self::Closed {
            name: Arc::from(name.as_ref()),
            args,
        }
    }

    /// Create a collection-of request for `element`
    pub fn sequence(element: CapabilityId) -> Self {
        Self::Sequence(Box::new(element))
    }

    /// Create a type-parameter placeholder
    pub fn param(index: usize) -> Self {
        Self::Param(index)
    }

    /// Name used to look the type up in a catalog
    ///
    /// Open and closed forms of one definition share a name. Sequences have
    /// no declaration of their own and report an empty name.
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Open { name, .. } | Self::Closed { name, .. } => &**name,
            Self::Sequence(_) | Self::Param(_) => "",
        }
    }

    /// Whether this is an open or closed generic shape
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Closed { .. })
    }

    /// Whether this is an unbound generic definition
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Number of type parameters (zero for non-generic shapes)
    pub fn arity(&self) -> usize {
        match self {
            Self::Open { arity, .. } => *arity,
            Self::Closed { args, .. } => args.len(),
            _ => 0,
        }
    }

    /// Unbound definition of a generic shape
    ///
    /// Returns `None` for non-generic shapes. An open definition is its own
    /// definition.
    pub fn generic_definition(&self) -> Option<CapabilityId> {
        match self {
            Self::Open { .. } => Some(self.clone()),
            Self::Closed { name, args } => Some(Self::Open {
                name: name.clone(),
                arity: args.len(),
            }),
            _ => None,
        }
    }

    /// Concrete type arguments of a closed instantiation
    pub fn type_arguments(&self) -> &[CapabilityId] {
        match self {
            Self::Closed { args, .. } => args,
            _ => &[],
        }
    }

    /// Element capability of a collection request
    pub fn sequence_element(&self) -> Option<&CapabilityId> {
        match self {
            Self::Sequence(element) => Some(element),
            _ => None,
        }
    }

    /// Close an unbound definition over concrete type arguments
    pub fn make_closed(&self, args: &[CapabilityId]) -> Result<CapabilityId> {
        match self {
            Self::Open { name, arity } if *arity == args.len() => Ok(Self::Closed {
                name: name.clone(),
                args: args.to_vec(),
            }),
            Self::Open { arity, .. } => Err(Error::invalid_shape(format!(
                "{} expects {arity} type arguments, got {}",
                self,
                args.len()
            ))),
            _ => Err(Error::invalid_shape(format!(
                "{} is not an unbound generic definition",
                self
            ))),
        }
    }

    /// Replace every `Param(i)` with `args[i]`
    ///
    /// Placeholders without a matching argument are left untouched.
    pub fn substitute(&self, args: &[CapabilityId]) -> CapabilityId {
        match self {
            Self::Param(index) => args.get(*index).cloned().unwrap_or_else(|| self.clone()),
            Self::Closed { name, args: inner } => Self::Closed {
                name: name.clone(),
                args: inner.iter().map(|arg| arg.substitute(args)).collect(),
            },
            Self::Sequence(element) => Self::Sequence(Box::new(element.substitute(args))),
            Self::Named(_) | Self::Open { .. } => self.clone(),
        }
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Open { name, arity } => {
                write!(f, "{name}<{}>", ",".repeat(arity.saturating_sub(1)))
            }
            Self::Closed { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            Self::Sequence(element) => write!(f, "[{element}]"),
            Self::Param(index) => write!(f, "T{index}"),
        }
    }
}

impl From<&str> for CapabilityId {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}
