//! Errors raised while building or introspecting the type catalog.

use thiserror::Error;

/// Failure to turn a type reference into a resolved descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// A simple name matched several qualified names in the catalog.
    #[error("type name '{name}' is ambiguous: {candidates:?}")]
    AmbiguousType {
        name: String,
        candidates: Vec<String>,
    },

    #[error("type '{name}' declares {declared} type parameter(s) but {actual} argument(s) were given")]
    TooManyTypeArguments {
        name: String,
        declared: usize,
        actual: usize,
    },

    #[error("invalid type reference '{input}' at offset {offset}: {message}")]
    Parse {
        input: String,
        offset: usize,
        message: String,
    },

    #[error("type reference nests deeper than {limit} levels")]
    NestingTooDeep { limit: u32 },

    #[error("type '{0}' is already defined")]
    DuplicateDefinition(String),
}
