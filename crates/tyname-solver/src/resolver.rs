//! Type name resolution.
//!
//! [`TypeNameResolver`] turns a [`ResolvedType`] into the name a schema
//! generator uses for it, in two positions:
//!
//! - **property**: the type of a model field (`property_type_name`)
//! - **response**: the return type of an operation (`response_type_name`)
//!
//! ## Naming sources
//!
//! | Descriptor | Name |
//! |------------|------|
//! | `Page<Widget>` (generic) | registry, else override, else simple name; then `<Widget>` |
//! | `int` (primitive) | registry (required) |
//! | `Color` (enum) | override, else `string` |
//! | `Widget[]` (array) | `Array<Widget>` |
//! | `Widget` (object) | override, else registry, else simple name |
//!
//! Generic prefixes consult the registry before the override; every other
//! descriptor consults the override first.
//!
//! ## Containers in response position
//!
//! `List<Widget>` renders as `List[Widget]`; a container of opaque objects
//! (`List<Object>`, `Object[]`) renders as the bare `List` / `Array`.

use crate::classify::{TypeKind, classify};
use crate::config::NamingConfig;
use crate::error::NamingError;
use crate::overrides::override_name;
use crate::recursion::DepthCounter;
use crate::registry::{OBJECT_NAME, TypeNameRegistry};
use crate::strategy::NamingStrategy;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{debug, trace};
use tyname_common::limits::MAX_TYPE_NAME_DEPTH;
use tyname_model::{
    AllowableValues, ContainerClassifier, EnumInspector, ModelMetadata, ResolvedType,
    StandardContainers, TypeDef, TypeDefId, TypeDefinitions, TypeInput, TypeIntrospector,
    TypeStore,
};

/// Name every enumeration renders as.
pub const ENUM_NAME: &str = "string";

/// Prefix of rendered array names.
pub const ARRAY_NAME: &str = "Array";

/// Coerce `input` into a resolved descriptor.
///
/// Already resolved descriptors are returned unchanged; references are handed
/// to the introspector.
pub fn resolve_as_type(
    introspector: &dyn TypeIntrospector,
    input: impl Into<TypeInput>,
) -> Result<ResolvedType, NamingError> {
    match input.into() {
        TypeInput::Resolved(ty) => Ok(ty),
        TypeInput::Reference(reference) => Ok(introspector.resolve(&reference)?),
    }
}

/// Computes schema names for resolved descriptors.
///
/// The resolver is `Send + Sync`. Its naming strategy can be replaced at any
/// time with [`set_naming_strategy`](Self::set_naming_strategy); each call
/// reads the strategy once, so a swap never affects a name already being
/// rendered.
pub struct TypeNameResolver {
    definitions: Arc<dyn TypeDefinitions>,
    introspector: Arc<dyn TypeIntrospector>,
    containers: Arc<dyn ContainerClassifier>,
    metadata: Arc<dyn ModelMetadata>,
    enums: Arc<dyn EnumInspector>,
    registry: TypeNameRegistry,
    strategy: ArcSwap<NamingStrategy>,
    max_depth: u32,
}

impl TypeNameResolver {
    /// A resolver backed entirely by `store`, with the standard registry,
    /// standard containers and the default strategy.
    pub fn new(store: Arc<TypeStore>) -> Self {
        let containers = StandardContainers::from_store(&store);
        Self {
            definitions: store.clone(),
            introspector: store.clone(),
            containers: Arc::new(containers),
            metadata: store.clone(),
            enums: store,
            registry: TypeNameRegistry::standard(),
            strategy: ArcSwap::from_pointee(NamingStrategy::default()),
            max_depth: MAX_TYPE_NAME_DEPTH,
        }
    }

    /// A resolver backed by `store` and configured by `config`.
    pub fn from_config(store: Arc<TypeStore>, config: &NamingConfig) -> Self {
        let mut containers = StandardContainers::from_store(&store);
        if config.maps_are_containers {
            containers = containers.with_maps(&store);
        }
        let registry = config
            .registry
            .iter()
            .fold(TypeNameRegistry::standard(), |registry, (qualified, name)| {
                registry.with_entry(qualified.clone(), name.clone())
            });

        Self::new(store)
            .with_containers(containers)
            .with_registry(registry)
            .with_strategy(config.strategy.clone())
            .with_max_depth(config.max_depth)
    }

    pub fn with_strategy(self, strategy: NamingStrategy) -> Self {
        self.strategy.store(Arc::new(strategy));
        self
    }

    pub fn with_registry(mut self, registry: TypeNameRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_containers(mut self, containers: impl ContainerClassifier + 'static) -> Self {
        self.containers = Arc::new(containers);
        self
    }

    pub fn with_metadata(mut self, metadata: Arc<dyn ModelMetadata>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_enum_inspector(mut self, enums: Arc<dyn EnumInspector>) -> Self {
        self.enums = enums;
        self
    }

    pub fn with_introspector(mut self, introspector: Arc<dyn TypeIntrospector>) -> Self {
        self.introspector = introspector;
        self
    }

    /// Builder: maximum generic/array nesting accepted while naming.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    // -----------------------------------------------------------------------
    // Naming strategy
    // -----------------------------------------------------------------------

    /// Replace the naming strategy. `None` keeps the current one.
    pub fn set_naming_strategy(&self, strategy: Option<NamingStrategy>) {
        if let Some(strategy) = strategy {
            debug!(?strategy, "installing naming strategy");
            self.strategy.store(Arc::new(strategy));
        }
    }

    pub fn naming_strategy(&self) -> Arc<NamingStrategy> {
        self.strategy.load_full()
    }

    // -----------------------------------------------------------------------
    // Public naming operations
    // -----------------------------------------------------------------------

    /// Name of `ty` as the type of a model property.
    pub fn property_type_name(&self, ty: &ResolvedType) -> Result<String, NamingError> {
        let name = if self.containers.is_container(ty) {
            self.containers.property_container_name(ty)
        } else {
            self.pass().inner_name(ty)?
        };
        trace!(%name, "property_type_name");
        Ok(name)
    }

    /// Name of `ty` as the return type of an operation.
    pub fn response_type_name(&self, ty: &ResolvedType) -> Result<String, NamingError> {
        let name = if self.containers.is_container(ty) {
            let qualifier = self.pass().return_qualifier(ty)?;
            format!("{}{}", self.containers.container_base_name(ty), qualifier)
        } else {
            self.pass().inner_name(ty)?
        };
        trace!(%name, "response_type_name");
        Ok(name)
    }

    /// Name of the items of a container property, for the schema's `items`
    /// field. `None` when `ty` is not a container or its items are unknown.
    pub fn property_items_type_name(
        &self,
        ty: &ResolvedType,
    ) -> Result<Option<String>, NamingError> {
        match self.containers.item_type(ty) {
            Some(item) => self.pass().inner_name(item).map(Some),
            None => Ok(None),
        }
    }

    /// Flat name without generic rendering: the registry name for primitives
    /// and array elements, the qualified name otherwise.
    pub fn simple_qualified_name(&self, ty: &ResolvedType) -> Result<String, NamingError> {
        match ty {
            ResolvedType::Primitive(id) => {
                let def = self.definition(*id)?;
                registry_name_of_primitive(&self.registry, &def)
            }
            ResolvedType::Array(element) => {
                let mut element = element.as_ref();
                let id = loop {
                    match element {
                        ResolvedType::Array(inner) => element = inner.as_ref(),
                        ResolvedType::Primitive(id) | ResolvedType::Object { erased: id, .. } => {
                            break *id;
                        }
                    }
                };
                let def = self.definition(id)?;
                Ok(self
                    .registry
                    .lookup_def(&def)
                    .map_or_else(|| def.qualified_name.clone(), str::to_string))
            }
            ResolvedType::Object { erased, .. } => Ok(self.definition(*erased)?.qualified_name),
        }
    }

    /// [`resolve_as_type`] using this resolver's introspector.
    pub fn resolve_as_type(&self, input: impl Into<TypeInput>) -> Result<ResolvedType, NamingError> {
        resolve_as_type(self.introspector.as_ref(), input)
    }

    /// Legal values of an enum type; `None` for anything else.
    pub fn allowable_values(&self, ty: &ResolvedType) -> Option<AllowableValues> {
        ty.erased().and_then(|id| self.enums.allowed_values_of(id))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn pass(&self) -> NamingPass<'_> {
        NamingPass {
            resolver: self,
            strategy: self.strategy.load_full(),
            depth: DepthCounter::new(self.max_depth),
        }
    }

    fn definition(&self, id: TypeDefId) -> Result<TypeDef, NamingError> {
        self.definitions
            .definition(id)
            .ok_or(NamingError::UnknownDefinition(id))
    }

    fn override_name(&self, id: TypeDefId) -> Option<String> {
        override_name(self.metadata.as_ref(), id)
    }
}

/// State of one top-level naming call: the strategy snapshot and the depth
/// reached so far.
struct NamingPass<'r> {
    resolver: &'r TypeNameResolver,
    strategy: Arc<NamingStrategy>,
    depth: DepthCounter,
}

impl NamingPass<'_> {
    fn inner_name(&mut self, ty: &ResolvedType) -> Result<String, NamingError> {
        if !self.depth.enter() {
            debug!(
                depth = self.depth.depth(),
                "type name nesting limit reached"
            );
            return Err(NamingError::DepthExceeded {
                limit: self.depth.max_depth(),
            });
        }
        let name = self.classified_name(ty);
        self.depth.leave();
        name
    }

    fn classified_name(&mut self, ty: &ResolvedType) -> Result<String, NamingError> {
        let kind = classify(self.resolver.definitions.as_ref(), ty)?;
        if !kind.is_generic() {
            if let Some(name) = kind.erased().and_then(|id| self.resolver.override_name(id)) {
                return Ok(name);
            }
        }
        self.name_of_kind(kind)
    }

    fn name_of_kind(&mut self, kind: TypeKind<'_>) -> Result<String, NamingError> {
        let resolver = self.resolver;
        let registry = &resolver.registry;
        match kind {
            TypeKind::Generic {
                erased,
                def,
                type_params,
            } => self.generic_name(erased, &def, type_params),
            TypeKind::Primitive { def } => registry_name_of_primitive(registry, &def),
            TypeKind::Enum { .. } => Ok(ENUM_NAME.to_string()),
            TypeKind::Array { element } => {
                let element_name = self.inner_name(element)?;
                Ok(self.strategy.render(ARRAY_NAME, [element_name]))
            }
            TypeKind::Object { def, .. } => Ok(registry
                .lookup_def(&def)
                .unwrap_or_else(|| def.simple_name())
                .to_string()),
        }
    }

    fn generic_name(
        &mut self,
        erased: TypeDefId,
        def: &TypeDef,
        type_params: &[ResolvedType],
    ) -> Result<String, NamingError> {
        let prefix = match self.resolver.registry.lookup_def(def) {
            Some(name) => name.to_string(),
            None => self
                .resolver
                .override_name(erased)
                .unwrap_or_else(|| def.simple_name().to_string()),
        };

        let args = type_params
            .iter()
            .take(def.generic_arity())
            .map(|param| self.inner_name(param))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.strategy.render(&prefix, &args))
    }

    /// `[Item]` suffix of a container in response position.
    fn return_qualifier(&mut self, ty: &ResolvedType) -> Result<String, NamingError> {
        if let Some(element) = ty.array_element() {
            let element_name = self.inner_name(element)?;
            return Ok(qualifier(element_name));
        }

        let type_params = ty.type_params();
        if type_params.len() > 1 {
            let container = ty
                .erased()
                .and_then(|id| self.resolver.definitions.definition(id))
                .map_or_else(
                    || self.resolver.containers.container_base_name(ty),
                    |def| def.qualified_name,
                );
            return Err(NamingError::TooManyContainerParameters {
                container,
                count: type_params.len(),
            });
        }

        match type_params.first() {
            Some(param) => {
                let param_name = self.inner_name(param)?;
                Ok(qualifier(param_name))
            }
            None => Ok(String::new()),
        }
    }
}

/// Primitives must have a registry entry.
fn registry_name_of_primitive(
    registry: &TypeNameRegistry,
    def: &TypeDef,
) -> Result<String, NamingError> {
    registry
        .lookup_def(def)
        .map(str::to_string)
        .ok_or_else(|| NamingError::UnregisteredPrimitive {
            name: def.qualified_name.clone(),
        })
}

/// Opaque `object` items carry no information and are left out.
fn qualifier(item_name: String) -> String {
    if item_name == OBJECT_NAME {
        String::new()
    } else {
        format!("[{item_name}]")
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
