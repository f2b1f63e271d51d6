//! Integration tests for custom modifier catalogs loaded from disk.

use std::fs;
use std::sync::Arc;

use kwexpand::prelude::*;
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"{
    "locations": {
        "capital_region": ["Budapest", "XIII. kerület"],
        "regional": ["Debrecen"],
        "national": ["Magyarország"]
    },
    "intent": ["Árak"],
    "quality": ["Profi", "  "],
    "action": ["Hívjon most"]
}"#;

#[test]
fn test_custom_catalog_drives_generation() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON)?;

    let catalog = ModifierCatalog::load_from_file(&path)?;
    assert_eq!(
        catalog.locations_for(Scope::CapitalRegion),
        &["budapest", "xiii. kerület"]
    );
    assert_eq!(catalog.quality_modifiers(), &["profi"]);
    assert_eq!(catalog.action_modifiers(), &["hívjon most"]);

    let expander = KeywordExpander::new(Arc::new(catalog));
    let result = expander.expand(&["Villanyszerelő"], Scope::CapitalRegion);

    assert_eq!(
        result.long_tail(),
        &[
            "villanyszerelő budapest",
            "budapest villanyszerelő",
            "villanyszerelő xiii. kerület",
            "xiii. kerület villanyszerelő",
            "árak villanyszerelő",
            "villanyszerelő árak",
            "profi villanyszerelő",
        ]
    );
    assert_eq!(result.stats().total(), 10);
    Ok(())
}

#[test]
fn test_catalog_with_empty_scope_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "locations": {"capital_region": ["budapest"], "regional": [], "national": ["online"]},
            "intent": ["ár"],
            "quality": ["profi"]
        }"#,
    )?;

    match ModifierCatalog::load_from_file(&path) {
        Err(KwexpandError::Catalog(msg)) => assert!(msg.contains("regional")),
        other => panic!("expected catalog error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_builtin_catalog_round_trips_through_json() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("builtin.json");
    fs::write(&path, serde_json::to_string_pretty(&**DEFAULT_CATALOG)?)?;

    let loaded = ModifierCatalog::load_from_file(&path)?;
    assert_eq!(&loaded, &**DEFAULT_CATALOG);
    Ok(())
}
