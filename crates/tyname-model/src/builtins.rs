//! Well-known definitions every catalog starts from.

use crate::def::TypeDef;

pub const OBJECT: &str = "java.lang.Object";
pub const STRING: &str = "java.lang.String";

pub const ITERABLE: &str = "java.lang.Iterable";
pub const COLLECTION: &str = "java.util.Collection";
pub const LIST: &str = "java.util.List";
pub const ARRAY_LIST: &str = "java.util.ArrayList";
pub const LINKED_LIST: &str = "java.util.LinkedList";
pub const SET: &str = "java.util.Set";
pub const HASH_SET: &str = "java.util.HashSet";
pub const TREE_SET: &str = "java.util.TreeSet";
pub const MAP: &str = "java.util.Map";
pub const HASH_MAP: &str = "java.util.HashMap";

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "float", "double", "char",
];

const SCALAR_CLASSES: &[&str] = &[
    OBJECT,
    STRING,
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Character",
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.util.Date",
    "java.sql.Date",
    "java.util.UUID",
    "java.util.Currency",
];

/// Primitives, boxed scalars, dates and the collection framework types.
pub fn builtin_definitions() -> Vec<TypeDef> {
    let mut defs: Vec<TypeDef> = PRIMITIVES.iter().map(|&name| TypeDef::primitive(name)).collect();
    defs.extend(SCALAR_CLASSES.iter().map(|&name| TypeDef::class(name)));

    for name in [ITERABLE, COLLECTION, LIST, SET] {
        defs.push(TypeDef::interface(name).with_type_params(["T"]));
    }
    for name in [ARRAY_LIST, LINKED_LIST, HASH_SET, TREE_SET] {
        defs.push(TypeDef::class(name).with_type_params(["E"]));
    }
    defs.push(TypeDef::interface(MAP).with_type_params(["K", "V"]));
    defs.push(TypeDef::class(HASH_MAP).with_type_params(["K", "V"]));
    defs
}
