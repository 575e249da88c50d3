//! Error handling types

use thiserror::Error;

use crate::value_objects::CapabilityId;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error source carried by wrapping variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Graft
///
/// Every variant is terminal: the resolver never retries or swallows a
/// failure, it surfaces to the original caller of `resolve`/`resolve_all`.
#[derive(Error, Debug)]
pub enum Error {
    /// No binding is registered for the requested capability
    #[error("No binding registered for {capability}")]
    UnknownCapability {
        /// The capability that was requested
        capability: CapabilityId,
    },

    /// More than one binding exists and no alternative id was supplied
    #[error(
        "Cannot choose an implementation for {capability}: {count} bindings registered, supply an alternative id"
    )]
    AmbiguousBinding {
        /// The capability that was requested
        capability: CapabilityId,
        /// Number of registered bindings
        count: usize,
    },

    /// An alternative id was supplied but no candidate binding carries it
    #[error("Alternative '{alternative_id}' is not registered for {capability}")]
    UnregisteredAlternative {
        /// The capability that was requested
        capability: CapabilityId,
        /// The alternative id that was requested
        alternative_id: String,
    },

    /// The capability is already being resolved higher in the current chain
    #[error("Cyclic dependency on {capability} (chain: {})", format_chain(.chain))]
    CyclicDependency {
        /// The capability that closed the cycle
        capability: CapabilityId,
        /// Resolution stack at the moment the cycle was detected, outermost first
        chain: Vec<CapabilityId>,
    },

    /// The chosen implementation exposes no public constructor
    #[error("No public constructor for {implementation} (binding '{alternative_id}')")]
    NoPublicConstructor {
        /// Implementation that could not be constructed
        implementation: CapabilityId,
        /// Alternative id of the binding being activated
        alternative_id: String,
    },

    /// Registration rejected: implementation cannot serve the capability
    #[error("Invalid binding {implementation} for {capability}: {reason}")]
    InvalidBinding {
        /// Capability the binding was declared for
        capability: CapabilityId,
        /// Implementation that was rejected
        implementation: CapabilityId,
        /// Why the binding was rejected
        reason: String,
    },

    /// Registration rejected: the pair is already registered
    #[error("{implementation} is already registered for {capability}")]
    DuplicateBinding {
        /// Capability the binding was declared for
        capability: CapabilityId,
        /// Implementation registered twice
        implementation: CapabilityId,
    },

    /// A type was referenced that the catalog does not know
    #[error("Type '{name}' is not declared")]
    UnknownType {
        /// Name of the missing type
        name: String,
    },

    /// A type was declared twice in the catalog
    #[error("Type '{name}' is already declared")]
    DuplicateDeclaration {
        /// Name of the type declared twice
        name: String,
    },

    /// A generic shape operation received the wrong arguments
    #[error("Invalid type shape: {message}")]
    InvalidShape {
        /// Description of the shape problem
        message: String,
    },

    /// A resolved instance is not of the requested Rust type
    #[error("Instance of {actual} cannot be viewed as {expected}")]
    TypeMismatch {
        /// Requested Rust type
        expected: &'static str,
        /// Rust type the instance was built from
        actual: &'static str,
    },

    /// A constructor factory failed or was invoked with unusable arguments
    #[error("Activation error: {message}")]
    Activation {
        /// Description of the activation failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

fn format_chain(chain: &[CapabilityId]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// Resolution error creation methods
impl Error {
    /// Create an unknown capability error
    pub fn unknown_capability(capability: CapabilityId) -> Self {
        Self::UnknownCapability { capability }
    }

    /// Create an ambiguous binding error
    pub fn ambiguous_binding(capability: CapabilityId, count: usize) -> Self {
        Self::AmbiguousBinding { capability, count }
    }

    /// Create an unregistered alternative error
    pub fn unregistered_alternative<S: Into<String>>(
        capability: CapabilityId,
        alternative_id: S,
    ) -> Self {
        Self::UnregisteredAlternative {
            capability,
            alternative_id: alternative_id.into(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic_dependency(capability: CapabilityId, chain: Vec<CapabilityId>) -> Self {
        Self::CyclicDependency { capability, chain }
    }

    /// Create a missing public constructor error
    pub fn no_public_constructor<S: Into<String>>(
        implementation: CapabilityId,
        alternative_id: S,
    ) -> Self {
        Self::NoPublicConstructor {
            implementation,
            alternative_id: alternative_id.into(),
        }
    }
}

// Registration error creation methods
impl Error {
    /// Create an invalid binding error
    pub fn invalid_binding<S: Into<String>>(
        capability: CapabilityId,
        implementation: CapabilityId,
        reason: S,
    ) -> Self {
        Self::InvalidBinding {
            capability,
            implementation,
            reason: reason.into(),
        }
    }

    /// Create a duplicate binding error
    pub fn duplicate_binding(capability: CapabilityId, implementation: CapabilityId) -> Self {
        Self::DuplicateBinding {
            capability,
            implementation,
        }
    }

    /// Create an unknown type error
    pub fn unknown_type<S: Into<String>>(name: S) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Create a duplicate declaration error
    pub fn duplicate_declaration<S: Into<String>>(name: S) -> Self {
        Self::DuplicateDeclaration { name: name.into() }
    }

    /// Create an invalid shape error
    pub fn invalid_shape<S: Into<String>>(message: S) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }
}

// Activation error creation methods
impl Error {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Create an activation error
    pub fn activation<S: Into<String>>(message: S) -> Self {
        Self::Activation {
            message: message.into(),
            source: None,
        }
    }

    /// Create an activation error with source
    pub fn activation_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Activation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io_with_source(source.to_string(), source)
    }
}
