//! Turning type references into resolved descriptors.

use crate::builtins;
use crate::def::{TypeDefKind, TypeStore};
use crate::error::ModelError;
use crate::reference::TypeReference;
use crate::resolved::ResolvedType;
use tracing::trace;

/// Produces resolved descriptors from raw references.
pub trait TypeIntrospector: Send + Sync {
    fn resolve(&self, reference: &TypeReference) -> Result<ResolvedType, ModelError>;
}

impl TypeIntrospector for TypeStore {
    /// Resolve against the catalog.
    ///
    /// Names are looked up with [`TypeStore::lookup`]. A generic type used
    /// with fewer arguments than it declares (including raw use) has the
    /// missing trailing arguments bound to `java.lang.Object` when the
    /// catalog defines it.
    fn resolve(&self, reference: &TypeReference) -> Result<ResolvedType, ModelError> {
        match reference {
            TypeReference::Array(element) => Ok(ResolvedType::array_of(self.resolve(element)?)),
            TypeReference::Named { name, args } => {
                let id = self.lookup(name)?;
                let def = self
                    .get(id)
                    .ok_or_else(|| ModelError::UnknownType(name.clone()))?;

                let declared = def.generic_arity();
                if args.len() > declared {
                    return Err(ModelError::TooManyTypeArguments {
                        name: def.qualified_name,
                        declared,
                        actual: args.len(),
                    });
                }

                if def.kind == TypeDefKind::Primitive {
                    return Ok(ResolvedType::primitive(id));
                }

                let mut type_params = args
                    .iter()
                    .map(|arg| self.resolve(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                if type_params.len() < declared {
                    if let Some(object) = self.id_of(builtins::OBJECT) {
                        trace!(
                            name = %def.qualified_name,
                            given = type_params.len(),
                            declared,
                            "binding unbound type parameters to Object"
                        );
                        type_params.resize(declared, ResolvedType::object(object));
                    }
                }
                Ok(ResolvedType::generic(id, type_params))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::TypeDef;

    fn store() -> TypeStore {
        let store = TypeStore::with_builtins();
        store.register(TypeDef::class("com.acme.Widget")).unwrap();
        store
    }

    #[test]
    fn resolves_generic_arguments_recursively() {
        let store = store();
        let reference = TypeReference::parse("List<Widget[]>").unwrap();
        let resolved = store.resolve(&reference).unwrap();

        let list = store.id_of("java.util.List").unwrap();
        let widget = store.id_of("com.acme.Widget").unwrap();
        assert_eq!(
            resolved,
            ResolvedType::generic(
                list,
                vec![ResolvedType::array_of(ResolvedType::object(widget))]
            )
        );
    }

    #[test]
    fn raw_generic_binds_object() {
        let store = store();
        let resolved = store.resolve(&TypeReference::named("Map")).unwrap();

        let object = ResolvedType::object(store.id_of("java.lang.Object").unwrap());
        assert_eq!(resolved.type_params(), &[object.clone(), object]);
    }

    #[test]
    fn primitives_resolve_to_primitive_kind() {
        let store = store();
        let resolved = store.resolve(&TypeReference::named("int")).unwrap();
        assert!(resolved.is_primitive());
    }

    #[test]
    fn too_many_arguments_is_rejected() {
        let store = store();
        let err = store
            .resolve(&TypeReference::parse("Widget<String>").unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::TooManyTypeArguments {
                name: "com.acme.Widget".to_string(),
                declared: 0,
                actual: 1,
            }
        );
    }

    #[test]
    fn unknown_and_ambiguous_names() {
        let store = store();
        assert_eq!(
            store.resolve(&TypeReference::named("Gadget")),
            Err(ModelError::UnknownType("Gadget".to_string()))
        );
        assert!(matches!(
            store.resolve(&TypeReference::named("Date")),
            Err(ModelError::AmbiguousType { .. })
        ));
    }
}
