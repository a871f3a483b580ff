//! Naming classification of resolved descriptors.
//!
//! Each descriptor is classified exactly once per naming step, and the
//! resolver dispatches on the result with an exhaustive match.

use crate::error::NamingError;
use tyname_model::{ResolvedType, TypeDef, TypeDefId, TypeDefinitions};

/// How a descriptor is named.
#[derive(Debug, Clone)]
pub enum TypeKind<'t> {
    /// Built-in scalar: registry name only.
    Primitive { def: TypeDef },

    /// Enumeration: rendered as `string`.
    Enum { erased: TypeDefId },

    /// `Array<element>`.
    Array { element: &'t ResolvedType },

    /// Parameterized use of a type that declares generic parameters.
    Generic {
        erased: TypeDefId,
        def: TypeDef,
        type_params: &'t [ResolvedType],
    },

    /// Anything else: registry name or simple name.
    Object { erased: TypeDefId, def: TypeDef },
}

impl TypeKind<'_> {
    pub fn is_generic(&self) -> bool {
        matches!(self, TypeKind::Generic { .. })
    }

    /// Erased identity, when the descriptor has one.
    pub fn erased(&self) -> Option<TypeDefId> {
        match self {
            TypeKind::Enum { erased }
            | TypeKind::Generic { erased, .. }
            | TypeKind::Object { erased, .. } => Some(*erased),
            TypeKind::Primitive { .. } | TypeKind::Array { .. } => None,
        }
    }
}

/// Classify `ty` against the catalog.
///
/// Priority: generic (actual parameters present *and* declared on the erased
/// type), then primitive, enum, array, plain object.
pub fn classify<'t>(
    definitions: &dyn TypeDefinitions,
    ty: &'t ResolvedType,
) -> Result<TypeKind<'t>, NamingError> {
    let (erased, type_params) = match ty {
        ResolvedType::Array(element) => {
            return Ok(TypeKind::Array {
                element: element.as_ref(),
            });
        }
        ResolvedType::Primitive(id) => (*id, &[][..]),
        ResolvedType::Object {
            erased,
            type_params,
        } => (*erased, type_params.as_slice()),
    };

    let def = definitions
        .definition(erased)
        .ok_or(NamingError::UnknownDefinition(erased))?;

    if !type_params.is_empty() && def.generic_arity() > 0 {
        return Ok(TypeKind::Generic {
            erased,
            def,
            type_params,
        });
    }
    if ty.is_primitive() {
        return Ok(TypeKind::Primitive { def });
    }
    if def.is_enum() {
        return Ok(TypeKind::Enum { erased });
    }
    Ok(TypeKind::Object { erased, def })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tyname_model::TypeStore;

    #[test]
    fn generic_requires_declared_and_actual_params() {
        let store = TypeStore::with_builtins();
        let list = store.id_of("java.util.List").unwrap();
        let widget = store.register(TypeDef::class("a.Widget")).unwrap();

        let parameterized = ResolvedType::generic(list, vec![ResolvedType::object(widget)]);
        assert!(classify(&store, &parameterized).unwrap().is_generic());

        let raw = ResolvedType::object(list);
        assert!(matches!(
            classify(&store, &raw).unwrap(),
            TypeKind::Object { .. }
        ));

        // Parameters on a type that declares none are ignored.
        let odd = ResolvedType::generic(widget, vec![ResolvedType::object(widget)]);
        assert!(matches!(
            classify(&store, &odd).unwrap(),
            TypeKind::Object { .. }
        ));
    }

    #[test]
    fn primitive_enum_and_array() {
        let store = TypeStore::with_builtins();
        let int = store.id_of("int").unwrap();
        let color = store
            .register(TypeDef::enumeration("a.Color", ["RED"]))
            .unwrap();

        assert!(matches!(
            classify(&store, &ResolvedType::primitive(int)).unwrap(),
            TypeKind::Primitive { .. }
        ));
        assert_eq!(
            classify(&store, &ResolvedType::object(color))
                .unwrap()
                .erased(),
            Some(color)
        );
        let array = ResolvedType::array_of(ResolvedType::primitive(int));
        assert!(matches!(
            classify(&store, &array).unwrap(),
            TypeKind::Array { .. }
        ));
    }

    #[test]
    fn unknown_identity_is_an_error() {
        let store = TypeStore::new();
        let ghost = ResolvedType::object(TypeDefId(42));
        assert_eq!(
            classify(&store, &ghost).unwrap_err(),
            NamingError::UnknownDefinition(TypeDefId(42))
        );
    }
}
