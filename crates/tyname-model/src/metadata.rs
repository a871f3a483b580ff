//! Declared model metadata and enum inspection.

use crate::def::{TypeDefId, TypeStore};
use serde::{Deserialize, Serialize};

/// Reads the display name a model declares for itself.
pub trait ModelMetadata: Send + Sync {
    /// The raw declared name. Blank values are returned as-is; callers decide
    /// what "absent" means.
    fn declared_override_name(&self, id: TypeDefId) -> Option<String>;
}

/// Reports the legal values of enumeration types.
pub trait EnumInspector: Send + Sync {
    /// `None` when `id` is not an enum.
    fn allowed_values_of(&self, id: TypeDefId) -> Option<AllowableValues>;
}

/// Legal literal values of an enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowableValues {
    /// Always `LIST` for enumerations.
    pub value_type: String,
    pub values: Vec<String>,
}

impl AllowableValues {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value_type: "LIST".to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

impl ModelMetadata for TypeStore {
    fn declared_override_name(&self, id: TypeDefId) -> Option<String> {
        self.get(id).and_then(|def| def.model_name)
    }
}

impl EnumInspector for TypeStore {
    fn allowed_values_of(&self, id: TypeDefId) -> Option<AllowableValues> {
        self.get(id)
            .filter(|def| def.is_enum())
            .map(|def| AllowableValues::list(def.enum_constants))
    }
}
