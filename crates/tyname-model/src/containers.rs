//! Container classification.
//!
//! Lists, sets and arrays (and optionally maps) are rendered differently from
//! ordinary generic types: they get a bare container name plus an item type
//! rather than `Name<Args>`.

use crate::builtins;
use crate::def::{TypeDefId, TypeStore};
use crate::resolved::ResolvedType;
use rustc_hash::FxHashMap;

/// Decides which descriptors are container-like and how they are called.
pub trait ContainerClassifier: Send + Sync {
    fn is_container(&self, ty: &ResolvedType) -> bool;

    /// Bare container name used in response positions, e.g. `List`.
    fn container_base_name(&self, ty: &ResolvedType) -> String;

    /// Full rendering used when the container is a model property.
    fn property_container_name(&self, ty: &ResolvedType) -> String;

    /// Descriptor of the items held by the container, if known.
    fn item_type<'t>(&self, ty: &'t ResolvedType) -> Option<&'t ResolvedType>;
}

/// Kind of a recognised container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    List,
    Set,
    Array,
    Map,
}

impl ContainerKind {
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Set => "Set",
            Self::Array => "Array",
            Self::Map => "Map",
        }
    }
}

/// Classifier for the collection framework types of the standard catalog.
///
/// Arrays are always containers. Maps are only classified as containers when
/// enabled with [`with_maps`](Self::with_maps).
#[derive(Clone, Debug, Default)]
pub struct StandardContainers {
    kinds: FxHashMap<TypeDefId, ContainerKind>,
}

impl StandardContainers {
    /// Recognise the list, set and map types present in `store`.
    pub fn from_store(store: &TypeStore) -> Self {
        let mut containers = Self::default();
        let known = [
            (builtins::ITERABLE, ContainerKind::List),
            (builtins::COLLECTION, ContainerKind::List),
            (builtins::LIST, ContainerKind::List),
            (builtins::ARRAY_LIST, ContainerKind::List),
            (builtins::LINKED_LIST, ContainerKind::List),
            (builtins::SET, ContainerKind::Set),
            (builtins::HASH_SET, ContainerKind::Set),
            (builtins::TREE_SET, ContainerKind::Set),
        ];
        for (name, kind) in known {
            if let Some(id) = store.id_of(name) {
                containers.kinds.insert(id, kind);
            }
        }
        containers
    }

    /// Builder: classify `java.util.Map` and `java.util.HashMap` as containers.
    pub fn with_maps(mut self, store: &TypeStore) -> Self {
        for name in [builtins::MAP, builtins::HASH_MAP] {
            if let Some(id) = store.id_of(name) {
                self.kinds.insert(id, ContainerKind::Map);
            }
        }
        self
    }

    /// Builder: classify a custom identity.
    pub fn with_container(mut self, id: TypeDefId, kind: ContainerKind) -> Self {
        self.kinds.insert(id, kind);
        self
    }

    pub fn kind_of(&self, ty: &ResolvedType) -> Option<ContainerKind> {
        match ty {
            ResolvedType::Array(_) => Some(ContainerKind::Array),
            ResolvedType::Object { erased, .. } => self.kinds.get(erased).copied(),
            ResolvedType::Primitive(_) => None,
        }
    }
}

impl ContainerClassifier for StandardContainers {
    fn is_container(&self, ty: &ResolvedType) -> bool {
        self.kind_of(ty).is_some()
    }

    fn container_base_name(&self, ty: &ResolvedType) -> String {
        self.kind_of(ty)
            .map_or("", ContainerKind::base_name)
            .to_string()
    }

    fn property_container_name(&self, ty: &ResolvedType) -> String {
        self.container_base_name(ty)
    }

    fn item_type<'t>(&self, ty: &'t ResolvedType) -> Option<&'t ResolvedType> {
        match self.kind_of(ty)? {
            ContainerKind::Array => ty.array_element(),
            ContainerKind::List | ContainerKind::Set => ty.type_params().first(),
            ContainerKind::Map => ty.type_params().get(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::TypeDef;

    #[test]
    fn classifies_lists_sets_and_arrays() {
        let store = TypeStore::with_builtins();
        let widget = store.register(TypeDef::class("com.acme.Widget")).unwrap();
        let containers = StandardContainers::from_store(&store);

        let list = ResolvedType::generic(
            store.id_of(builtins::ARRAY_LIST).unwrap(),
            vec![ResolvedType::object(widget)],
        );
        let set = ResolvedType::object(store.id_of(builtins::SET).unwrap());
        let array = ResolvedType::array_of(ResolvedType::object(widget));

        assert_eq!(containers.container_base_name(&list), "List");
        assert_eq!(containers.container_base_name(&set), "Set");
        assert_eq!(containers.container_base_name(&array), "Array");
        assert!(!containers.is_container(&ResolvedType::object(widget)));
    }

    #[test]
    fn maps_are_opt_in() {
        let store = TypeStore::with_builtins();
        let map = ResolvedType::object(store.id_of(builtins::MAP).unwrap());

        assert!(!StandardContainers::from_store(&store).is_container(&map));
        assert!(
            StandardContainers::from_store(&store)
                .with_maps(&store)
                .is_container(&map)
        );
    }

    #[test]
    fn item_type_of_map_is_value() {
        let store = TypeStore::with_builtins();
        let string = ResolvedType::object(store.id_of(builtins::STRING).unwrap());
        let object = ResolvedType::object(store.id_of(builtins::OBJECT).unwrap());
        let map = ResolvedType::generic(
            store.id_of(builtins::MAP).unwrap(),
            vec![string, object.clone()],
        );
        let containers = StandardContainers::from_store(&store).with_maps(&store);

        assert_eq!(containers.item_type(&map), Some(&object));
    }
}
