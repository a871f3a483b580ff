//! Schema type names for resolved type descriptors.
//!
//! This crate renders a [`ResolvedType`](tyname_model::ResolvedType) as the
//! name an API schema generator uses for it:
//!
//! - **Registry**: canonical names of well-known scalars (`registry`)
//! - **Naming strategy**: generic notation, swappable per resolver (`strategy`)
//! - **Overrides**: declared model names (`overrides`)
//! - **Resolver**: the recursive naming algorithm (`resolver`)
//!
//! ```
//! use std::sync::Arc;
//! use tyname_model::{TypeDef, TypeReference, TypeStore};
//! use tyname_solver::TypeNameResolver;
//!
//! let store = Arc::new(TypeStore::with_builtins());
//! store.register(TypeDef::class("com.acme.Widget")).unwrap();
//! let resolver = TypeNameResolver::new(store);
//!
//! let ty = resolver
//!     .resolve_as_type(TypeReference::parse("List<Widget>").unwrap())
//!     .unwrap();
//! assert_eq!(resolver.response_type_name(&ty).unwrap(), "List[Widget]");
//! ```

pub mod classify;
mod config;
mod error;
pub mod overrides;
pub mod recursion;
pub mod registry;
pub mod resolver;
mod strategy;

pub use config::NamingConfig;
pub use error::NamingError;
pub use registry::TypeNameRegistry;
pub use resolver::{TypeNameResolver, resolve_as_type};
pub use strategy::NamingStrategy;
