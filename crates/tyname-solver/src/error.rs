//! Naming failures.

use thiserror::Error;
use tyname_model::{ModelError, TypeDefId};

/// Failure to compute a type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// A container in return position carries more than one type parameter.
    #[error("expects container to have at most one generic parameter, '{container}' has {count}")]
    TooManyContainerParameters { container: String, count: usize },

    /// Primitives must always have a registry entry.
    #[error("primitive type '{name}' has no registered schema name")]
    UnregisteredPrimitive { name: String },

    #[error("type definition {0:?} is not in the catalog")]
    UnknownDefinition(TypeDefId),

    #[error("type nests deeper than {limit} levels")]
    DepthExceeded { limit: u32 },

    #[error(transparent)]
    Model(#[from] ModelError),
}
