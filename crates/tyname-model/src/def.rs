//! Type definitions and the catalog that owns them.
//!
//! Every nominal type the naming core can talk about is registered here once
//! and referred to by a [`TypeDefId`]. A `TypeDefId` is the *erased identity*
//! of a type: `java.util.List` rather than `java.util.List<Widget>`. The
//! generic arguments live on the [`ResolvedType`](crate::ResolvedType) that
//! references the definition.
//!
//! | Kind | Example | Naming treatment |
//! |------|---------|------------------|
//! | Primitive | `int` | registry name only |
//! | Class / Interface | `com.acme.Widget` | registry, override or simple name |
//! | Enum | `com.acme.Color` | always `string`, values reported separately |

use crate::error::ModelError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

// =============================================================================
// TypeDefId - Erased Identity
// =============================================================================

/// Identity of a registered type definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeDefId(pub u32);

impl TypeDefId {
    /// Sentinel value for invalid `TypeDefId`.
    pub const INVALID: Self = Self(0);

    /// First valid `TypeDefId`.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this `TypeDefId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

// =============================================================================
// TypeDefKind
// =============================================================================

/// Kind of type definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDefKind {
    /// Language built-in scalar (`int`, `boolean`, `char`, ...).
    Primitive,
    Class,
    Interface,
    /// Enumeration; its constants are listed in `enum_constants`.
    Enum,
}

// =============================================================================
// TypeDef
// =============================================================================

/// Everything the naming core needs to know about an erased type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    pub kind: TypeDefKind,

    /// Fully qualified name, e.g. `com.acme.Widget` or `java.util.Map`.
    pub qualified_name: String,

    /// Declared generic parameter names, in declaration order.
    #[serde(default)]
    pub type_params: Vec<String>,

    /// Display name declared on the model, if any. May be blank.
    #[serde(default)]
    pub model_name: Option<String>,

    /// Constants of an enum, in declaration order.
    #[serde(default)]
    pub enum_constants: Vec<String>,
}

impl TypeDef {
    fn new(kind: TypeDefKind, qualified_name: impl Into<String>) -> Self {
        Self {
            kind,
            qualified_name: qualified_name.into(),
            type_params: Vec::new(),
            model_name: None,
            enum_constants: Vec::new(),
        }
    }

    /// A language built-in scalar.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(TypeDefKind::Primitive, name)
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::new(TypeDefKind::Class, qualified_name)
    }

    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::new(TypeDefKind::Interface, qualified_name)
    }

    /// An enum with the given constants.
    pub fn enumeration<I, S>(qualified_name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut def = Self::new(TypeDefKind::Enum, qualified_name);
        def.enum_constants = constants.into_iter().map(Into::into).collect();
        def
    }

    /// Builder: declare generic parameters.
    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: attach a declared model name.
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    /// Unqualified name: the segment after the last `.` or `$`.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Number of declared generic parameters.
    pub fn generic_arity(&self) -> usize {
        self.type_params.len()
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeDefKind::Enum
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeDefKind::Primitive
    }
}

// =============================================================================
// TypeDefinitions - read-only catalog view
// =============================================================================

/// Read access to registered definitions by identity.
pub trait TypeDefinitions: Send + Sync {
    fn definition(&self, id: TypeDefId) -> Option<TypeDef>;
}

// =============================================================================
// TypeStore - Storage for Definitions
// =============================================================================

/// Thread-safe catalog of type definitions.
///
/// Uses `DashMap` so definitions can be registered while other threads are
/// naming types.
///
/// ## Usage
///
/// ```
/// use tyname_model::{TypeDef, TypeStore};
///
/// let store = TypeStore::with_builtins();
/// let page = store
///     .register(TypeDef::class("com.acme.Page").with_type_params(["T"]))
///     .expect("fresh name");
///
/// assert_eq!(store.lookup("Page"), Ok(page));
/// ```
pub struct TypeStore {
    /// `TypeDefId` -> `TypeDef` mapping
    definitions: DashMap<TypeDefId, TypeDef>,

    /// Qualified name -> `TypeDefId`
    by_name: DashMap<String, TypeDefId>,

    /// Next available `TypeDefId`
    next_id: AtomicU32,
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            by_name: DashMap::new(),
            next_id: AtomicU32::new(TypeDefId::FIRST_VALID),
        }
    }

    /// Create a store pre-populated with [`builtin_definitions`](crate::builtins::builtin_definitions).
    pub fn with_builtins() -> Self {
        let store = Self::new();
        for def in crate::builtins::builtin_definitions() {
            if let Err(err) = store.register(def) {
                trace!(%err, "skipping builtin");
            }
        }
        store
    }

    /// Register a definition under its qualified name.
    pub fn register(&self, def: TypeDef) -> Result<TypeDefId, ModelError> {
        match self.by_name.entry(def.qualified_name.clone()) {
            Entry::Occupied(_) => Err(ModelError::DuplicateDefinition(def.qualified_name)),
            Entry::Vacant(slot) => {
                let id = TypeDefId(self.next_id.fetch_add(1, Ordering::SeqCst));
                trace!(
                    def_id = id.0,
                    name = %def.qualified_name,
                    kind = ?def.kind,
                    "TypeStore::register"
                );
                self.definitions.insert(id, def);
                slot.insert(id);
                Ok(id)
            }
        }
    }

    /// Register every definition, stopping at the first failure.
    pub fn register_all(
        &self,
        defs: impl IntoIterator<Item = TypeDef>,
    ) -> Result<Vec<TypeDefId>, ModelError> {
        defs.into_iter().map(|def| self.register(def)).collect()
    }

    /// Get definition info by `TypeDefId`.
    pub fn get(&self, id: TypeDefId) -> Option<TypeDef> {
        self.definitions.get(&id).map(|r| r.clone())
    }

    /// Identity registered under an exact qualified name.
    pub fn id_of(&self, qualified_name: &str) -> Option<TypeDefId> {
        self.by_name.get(qualified_name).map(|r| *r)
    }

    /// Find a definition by qualified name, or by simple name when that is
    /// unambiguous.
    pub fn lookup(&self, name: &str) -> Result<TypeDefId, ModelError> {
        if let Some(id) = self.id_of(name) {
            return Ok(id);
        }

        let mut matches: Vec<(String, TypeDefId)> = self
            .definitions
            .iter()
            .filter(|entry| entry.value().simple_name() == name)
            .map(|entry| (entry.value().qualified_name.clone(), *entry.key()))
            .collect();

        match matches.len() {
            0 => Err(ModelError::UnknownType(name.to_string())),
            1 => Ok(matches[0].1),
            _ => {
                matches.sort();
                Err(ModelError::AmbiguousType {
                    name: name.to_string(),
                    candidates: matches.into_iter().map(|(name, _)| name).collect(),
                })
            }
        }
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl TypeDefinitions for TypeStore {
    fn definition(&self, id: TypeDefId) -> Option<TypeDef> {
        self.get(id)
    }
}

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
