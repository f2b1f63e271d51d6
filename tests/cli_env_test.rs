//! The catalog file can be given through the environment.
//!
//! Kept in its own test binary: it sets a process-wide variable.

use std::fs;

use clap::Parser;
use kwexpand::cli::{KwexpandArgs, execute_command};
use tempfile::TempDir;

#[test]
fn test_catalog_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "locations": {"capital_region": ["Budapest"], "regional": ["Szeged"], "national": ["Online"]},
            "intent": ["Ár"],
            "quality": ["Profi"]
        }"#,
    )
    .unwrap();

    // SAFETY: this is the only test in this binary, no other thread reads the environment
    unsafe { std::env::set_var("KWEXPAND_CATALOG", &path) };

    let args = KwexpandArgs::try_parse_from(["kwexpand", "-f", "json", "expand", "zár"]).unwrap();
    assert_eq!(args.catalog.as_deref(), Some(path.as_path()));
    execute_command(args).unwrap();

    let args = KwexpandArgs::try_parse_from([
        "kwexpand",
        "--catalog",
        "/nonexistent/catalog.json",
        "catalog",
    ])
    .unwrap();
    assert!(execute_command(args).is_err());
}
