//! Tests for the tyname driver: catalog/config loading and per-mode output.

use super::*;
use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = r#"[
    { "kind": "class", "qualifiedName": "com.acme.Widget" },
    { "kind": "class", "qualifiedName": "com.acme.Page", "typeParams": ["T"], "modelName": "PageOf" },
    { "kind": "enum", "qualifiedName": "com.acme.Color", "enumConstants": ["RED", "GREEN"] }
]"#;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn parse_args(dir: &Path, extra: &[&str]) -> CliArgs {
    let catalog = write_file(dir, "types.json", CATALOG);
    let mut argv = vec![
        "tyname".to_string(),
        "--types".to_string(),
        catalog.display().to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn test_property_mode_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let args = parse_args(
        temp_dir.path(),
        &["Page<Widget>", "int", "Color", "List<Widget>"],
    );

    assert_eq!(args.mode, Mode::Property);
    assert_eq!(
        run(&args).unwrap(),
        vec!["PageOf<Widget>", "int", "string", "List"]
    );
}

#[test]
fn test_response_mode() {
    let temp_dir = TempDir::new().unwrap();
    let args = parse_args(
        temp_dir.path(),
        &["--mode", "response", "List<Widget>", "Object[]", "Widget"],
    );

    assert_eq!(
        run(&args).unwrap(),
        vec!["List[Widget]", "Array", "Widget"]
    );
}

#[test]
fn test_qualified_and_values_modes() {
    let temp_dir = TempDir::new().unwrap();

    let qualified = parse_args(temp_dir.path(), &["-m", "qualified", "Widget[]", "long"]);
    assert_eq!(run(&qualified).unwrap(), vec!["com.acme.Widget", "long"]);

    let values = parse_args(temp_dir.path(), &["-m", "values", "Color", "Widget"]);
    assert_eq!(
        run(&values).unwrap(),
        vec![r#"{"valueType":"LIST","values":["RED","GREEN"]}"#, "null"]
    );
}

#[test]
fn test_config_file_and_notation_override() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(
        temp_dir.path(),
        "naming.json",
        r#"{
            "strategy": { "openGeneric": "[", "closeGeneric": "]", "typeListDelimiter": "|" },
            "registry": { "com.acme.Widget": "widget" }
        }"#,
    );
    let config = config.display().to_string();

    let from_config = parse_args(temp_dir.path(), &["--config", &config, "Map<String, Widget>"]);
    assert_eq!(run(&from_config).unwrap(), vec!["Map[string|widget]"]);

    let overridden = parse_args(
        temp_dir.path(),
        &["--config", &config, "--notation", "guillemets", "Map<String, Widget>"],
    );
    assert_eq!(run(&overridden).unwrap(), vec!["Map«string,widget»"]);
}

#[test]
fn test_unknown_type_reports_reference() {
    let temp_dir = TempDir::new().unwrap();
    let args = parse_args(temp_dir.path(), &["Sprocket"]);

    let err = run(&args).unwrap_err();
    assert!(format!("{err:#}").contains("cannot name `Sprocket`"));
}

#[test]
fn test_malformed_catalog_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(temp_dir.path(), "broken.json", "{ not json");
    let args = CliArgs::try_parse_from([
        "tyname",
        "--types",
        &catalog.display().to_string(),
        "int",
    ])
    .unwrap();

    let err = build_resolver(&args).err().unwrap();
    assert!(err.to_string().contains("failed to parse type catalog"));
}

#[test]
fn test_duplicate_catalog_entry_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(
        temp_dir.path(),
        "dupes.json",
        r#"[{ "kind": "class", "qualifiedName": "java.lang.String" }]"#,
    );

    let err = catalog::load_store(Some(&catalog)).err().unwrap();
    assert!(err.to_string().contains("invalid type catalog"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = catalog::read_config(&temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read naming config"));
}

#[test]
fn test_at_least_one_reference_required() {
    assert!(CliArgs::try_parse_from(["tyname"]).is_err());
}
