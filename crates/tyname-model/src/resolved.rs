//! Resolved type descriptors.
//!
//! A [`ResolvedType`] is a fully reified type: the erased identity plus every
//! actual generic argument, or an array with its element descriptor. It is
//! what the introspector produces and what the naming core consumes.

use crate::def::TypeDefId;

/// Fully resolved type.
///
/// Arrays carry no type parameters of their own: the element descriptor
/// carries them recursively.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    /// Language built-in scalar.
    Primitive(TypeDefId),

    /// Array of the element type.
    Array(Box<ResolvedType>),

    /// Nominal type with its actual type parameters in declaration order.
    Object {
        erased: TypeDefId,
        type_params: Vec<ResolvedType>,
    },
}

impl ResolvedType {
    pub fn primitive(id: TypeDefId) -> Self {
        Self::Primitive(id)
    }

    /// A non-generic (or raw) nominal type.
    pub fn object(erased: TypeDefId) -> Self {
        Self::Object {
            erased,
            type_params: Vec::new(),
        }
    }

    pub fn generic(erased: TypeDefId, type_params: Vec<ResolvedType>) -> Self {
        Self::Object {
            erased,
            type_params,
        }
    }

    pub fn array_of(element: ResolvedType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Erased identity; `None` for arrays.
    pub fn erased(&self) -> Option<TypeDefId> {
        match self {
            Self::Primitive(id) => Some(*id),
            Self::Object { erased, .. } => Some(*erased),
            Self::Array(_) => None,
        }
    }

    /// Actual type parameters; always empty for primitives and arrays.
    pub fn type_params(&self) -> &[ResolvedType] {
        match self {
            Self::Object { type_params, .. } => type_params,
            Self::Primitive(_) | Self::Array(_) => &[],
        }
    }

    pub fn array_element(&self) -> Option<&ResolvedType> {
        match self {
            Self::Array(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_have_no_erased_identity_or_params() {
        let widget = ResolvedType::object(TypeDefId(7));
        let array = ResolvedType::array_of(widget.clone());

        assert_eq!(array.erased(), None);
        assert!(array.type_params().is_empty());
        assert_eq!(array.array_element(), Some(&widget));
        assert!(array.is_array());
    }
}
