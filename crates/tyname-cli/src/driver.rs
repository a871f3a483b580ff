//! Runs one `tyname` invocation.

use anyhow::{Context, Result};
use tracing::debug;
use tyname_model::TypeReference;
use tyname_solver::{NamingConfig, TypeNameResolver};

use crate::args::{CliArgs, Mode};
use crate::catalog;

/// Resolver configured from the catalog, config file and notation flag.
pub fn build_resolver(args: &CliArgs) -> Result<TypeNameResolver> {
    let store = catalog::load_store(args.types.as_deref())?;
    let config = match args.config.as_deref() {
        Some(path) => catalog::read_config(path)?,
        None => NamingConfig::default(),
    };
    debug!(?config, "naming configuration");

    let resolver = TypeNameResolver::from_config(store, &config);
    resolver.set_naming_strategy(args.notation.map(|notation| notation.strategy()));
    Ok(resolver)
}

/// Render `reference` according to `mode`.
pub fn render(resolver: &TypeNameResolver, mode: Mode, reference: &str) -> Result<String> {
    let parsed = TypeReference::parse(reference)?;
    let ty = resolver.resolve_as_type(parsed)?;
    let rendered = match mode {
        Mode::Property => resolver.property_type_name(&ty)?,
        Mode::Response => resolver.response_type_name(&ty)?,
        Mode::Qualified => resolver.simple_qualified_name(&ty)?,
        Mode::Values => serde_json::to_string(&resolver.allowable_values(&ty))?,
    };
    Ok(rendered)
}

/// One output line per reference, in argument order.
pub fn run(args: &CliArgs) -> Result<Vec<String>> {
    let resolver = build_resolver(args)?;
    args.references
        .iter()
        .map(|reference| {
            render(&resolver, args.mode, reference)
                .with_context(|| format!("cannot name `{reference}`"))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
