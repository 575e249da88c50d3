use graft_domain::{Activator, CapabilityId, Constructor, Error, Parameter, Result};

use super::{TypeCatalog, TypeKind};

impl Activator for TypeCatalog {
    fn constructors(&self, implementation: &CapabilityId) -> Result<Vec<Constructor>> {
        let declaration = self
            .declaration(implementation)
            .ok_or_else(|| Error::unknown_type(implementation.to_string()))?;

        if declaration.kind() != TypeKind::Concrete {
            return Err(Error::activation(format!(
                "{implementation} is {:?} and cannot be instantiated",
                declaration.kind()
            )));
        }
        if implementation.is_open() {
            return Err(Error::activation(format!(
                "{implementation} is an unbound generic definition"
            )));
        }
        if declaration.arity() != implementation.arity() {
            return Err(Error::activation(format!(
                "{implementation} does not match the declared arity {}",
                declaration.arity()
            )));
        }

        let args = implementation.type_arguments();
        Ok(declaration
            .constructors()
            .iter()
            .map(|spec| Constructor {
                parameters: spec
                    .parameters()
                    .iter()
                    .map(|parameter| Parameter {
                        capability: parameter.capability.substitute(args),
                        provision: parameter.provision.clone(),
                    })
                    .collect(),
                public: spec.is_public(),
                factory: spec.factory.clone(),
            })
            .collect())
    }
}
