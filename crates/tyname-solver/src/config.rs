//! Naming configuration.
//!
//! ```json
//! {
//!   "strategy": { "openGeneric": "«", "closeGeneric": "»", "typeListDelimiter": "," },
//!   "maxDepth": 32,
//!   "mapsAreContainers": true,
//!   "registry": { "java.time.Instant": "date-time" }
//! }
//! ```
//!
//! Every field is optional.

use crate::strategy::NamingStrategy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tyname_common::limits::MAX_TYPE_NAME_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingConfig {
    pub strategy: NamingStrategy,

    /// Maximum generic/array nesting accepted while naming.
    pub max_depth: u32,

    /// Classify `Map`/`HashMap` as containers.
    pub maps_are_containers: bool,

    /// Extra registry entries: qualified name -> schema name.
    pub registry: FxHashMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            strategy: NamingStrategy::default(),
            max_depth: MAX_TYPE_NAME_DEPTH,
            maps_are_containers: false,
            registry: FxHashMap::default(),
        }
    }
}

impl NamingConfig {
    /// Parse a JSON configuration document.
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
