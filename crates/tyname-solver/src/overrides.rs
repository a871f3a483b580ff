//! Declared model-name overrides.

use tyname_model::{ModelMetadata, TypeDefId};

/// The display name declared for `id`, ignoring blank declarations.
pub fn override_name(metadata: &dyn ModelMetadata, id: TypeDefId) -> Option<String> {
    metadata
        .declared_override_name(id)
        .filter(|name| !name.trim().is_empty())
}
