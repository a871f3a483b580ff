//! Loading the type catalog and naming configuration from disk.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use tyname_model::{TypeDef, TypeStore};
use tyname_solver::NamingConfig;

/// Parse a catalog document: a JSON array of type definitions.
pub fn parse_catalog(source: &str) -> serde_json::Result<Vec<TypeDef>> {
    serde_json::from_str(source)
}

pub fn read_catalog(path: &Path) -> Result<Vec<TypeDef>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read type catalog: {}", path.display()))?;
    parse_catalog(&source)
        .with_context(|| format!("failed to parse type catalog: {}", path.display()))
}

/// The built-in catalog, extended with the definitions in `path`.
pub fn load_store(path: Option<&Path>) -> Result<Arc<TypeStore>> {
    let store = TypeStore::with_builtins();
    if let Some(path) = path {
        let defs = read_catalog(path)?;
        let ids = store
            .register_all(defs)
            .with_context(|| format!("invalid type catalog: {}", path.display()))?;
        debug!(count = ids.len(), path = %path.display(), "registered type catalog");
    }
    Ok(Arc::new(store))
}

pub fn read_config(path: &Path) -> Result<NamingConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read naming config: {}", path.display()))?;
    NamingConfig::parse(&source)
        .with_context(|| format!("failed to parse naming config: {}", path.display()))
}
