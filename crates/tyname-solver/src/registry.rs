//! Canonical schema names for well-known scalar types.
//!
//! The registry maps the qualified name of an erased type to the name a
//! schema uses for it (`java.lang.Long` -> `long`). A missing entry is not an
//! error: it only means the type is not a well-known scalar.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tyname_model::TypeDef;

/// Name used for the opaque root object type.
pub const OBJECT_NAME: &str = "object";

static STANDARD_NAMES: Lazy<FxHashMap<String, String>> = Lazy::new(|| {
    [
        ("long", "long"),
        ("int", "int"),
        ("short", "int"),
        ("double", "double"),
        ("float", "float"),
        ("byte", "byte"),
        ("boolean", "boolean"),
        ("char", "string"),
        ("java.util.Date", "date-time"),
        ("java.sql.Date", "date"),
        ("java.lang.String", "string"),
        ("java.lang.Object", OBJECT_NAME),
        ("java.lang.Long", "long"),
        ("java.lang.Integer", "int"),
        ("java.lang.Short", "int"),
        ("java.lang.Double", "double"),
        ("java.lang.Float", "float"),
        ("java.lang.Boolean", "boolean"),
        ("java.lang.Byte", "byte"),
        ("java.lang.Character", "string"),
        ("java.math.BigDecimal", "number"),
        ("java.math.BigInteger", "number"),
        ("java.util.Currency", "string"),
        ("java.util.UUID", "string"),
    ]
    .into_iter()
    .map(|(qualified, name)| (qualified.to_string(), name.to_string()))
    .collect()
});

/// Qualified name -> schema name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeNameRegistry {
    names: FxHashMap<String, String>,
}

impl Default for TypeNameRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl TypeNameRegistry {
    /// The standard scalar table.
    pub fn standard() -> Self {
        Self {
            names: STANDARD_NAMES.clone(),
        }
    }

    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            names: FxHashMap::default(),
        }
    }

    /// Builder: add or replace an entry.
    pub fn with_entry(mut self, qualified_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(qualified_name.into(), name.into());
        self
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<&str> {
        self.names.get(qualified_name).map(String::as_str)
    }

    pub fn lookup_def(&self, def: &TypeDef) -> Option<&str> {
        self.lookup(&def.qualified_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scalars() {
        let registry = TypeNameRegistry::standard();
        assert_eq!(registry.lookup("int"), Some("int"));
        assert_eq!(registry.lookup("java.lang.Long"), Some("long"));
        assert_eq!(registry.lookup("java.math.BigDecimal"), Some("number"));
        assert_eq!(registry.lookup("java.util.Date"), Some("date-time"));
        assert_eq!(registry.lookup("java.lang.Object"), Some(OBJECT_NAME));
        assert_eq!(registry.lookup("com.acme.Widget"), None);
    }

    #[test]
    fn every_builtin_primitive_is_registered() {
        let registry = TypeNameRegistry::standard();
        for def in tyname_model::builtins::builtin_definitions() {
            if def.is_primitive() {
                assert!(
                    registry.lookup_def(&def).is_some(),
                    "{} is not registered",
                    def.qualified_name
                );
            }
        }
    }

    #[test]
    fn entries_can_be_added_and_replaced() {
        let registry = TypeNameRegistry::empty()
            .with_entry("java.time.Instant", "date-time")
            .with_entry("int", "integer");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("java.time.Instant"), Some("date-time"));
        assert_eq!(registry.lookup("int"), Some("integer"));
    }
}
