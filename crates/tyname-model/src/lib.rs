//! Type catalog and resolved type descriptors for tyname.
//!
//! This crate provides everything the naming core consumes:
//! - The catalog of erased types (`TypeStore`, `TypeDef`, `TypeDefId`)
//! - Resolved descriptors (`ResolvedType`) and raw references (`TypeReference`)
//! - The collaborator seams (`TypeIntrospector`, `ContainerClassifier`,
//!   `ModelMetadata`, `EnumInspector`) with catalog-backed implementations

pub mod builtins;
pub mod containers;
pub mod def;
mod error;
mod introspect;
mod metadata;
mod reference;
mod resolved;

pub use containers::{ContainerClassifier, ContainerKind, StandardContainers};
pub use def::{TypeDef, TypeDefId, TypeDefKind, TypeDefinitions, TypeStore};
pub use error::ModelError;
pub use introspect::TypeIntrospector;
pub use metadata::{AllowableValues, EnumInspector, ModelMetadata};
pub use reference::{TypeInput, TypeReference};
pub use resolved::ResolvedType;
