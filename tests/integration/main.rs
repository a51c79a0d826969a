//! Integration tests for the storecart CLI
//!
//! These tests run the real binary against catalog files in a temporary
//! directory, with `HOME` pointed at an empty directory so no user config
//! leaks in.


use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[items]]
name = "apple"
price = 10
hashtags = ["fruit", "red"]
description = "Crisp and sweet"

[[items]]
name = "banana"
price = 5
hashtags = ["fruit", "yellow"]

[[items]]
name = "mango"
price = "7"
hashtags = ["fruit", "tropical"]

[[items]]
name = "lemon"
price = 3.5
hashtags = ["fruit", "yellow", "citrus"]

[[items]]
name = "yellow pepper"
price = 6
hashtags = ["vegetable", "yellow"]
"#;

/// A temp directory with `catalog.toml` and an empty `home/`
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("catalog.toml"), CATALOG).unwrap();
        std::fs::create_dir(dir.path().join("home")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog(&self) -> std::path::PathBuf {
        self.dir.path().join("catalog.toml")
    }

    /// A storecart command running inside this workspace
    pub fn storecart(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("storecart"));
        cmd.current_dir(self.path())
            .env("HOME", self.path().join("home"))
            .env("NO_COLOR", "1")
            .env_remove("STORECART_CATALOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_version() {
    let ws = Workspace::new();
    ws.storecart()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    ws.storecart()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storecart v"));
}

#[test]
fn test_help_lists_subcommands() {
    let ws = Workspace::new();
    ws.storecart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("checkout"))
        .stdout(predicate::str::contains("--catalog"));
}

// =============================================================================
// CATALOG COMMANDS
// =============================================================================

#[test]
fn test_items_lists_catalog_from_cwd() {
    let ws = Workspace::new();
    ws.storecart()
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::contains("apple"))
        .stdout(predicate::str::contains("Crisp and sweet"))
        .stdout(predicate::str::contains("5 item(s)."));
}

#[test]
fn test_items_json_coerces_prices() {
    let ws = Workspace::new();
    let output = ws.storecart().args(["--json", "items"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 5);
    assert_eq!(json["items"][2]["name"], "mango");
    assert_eq!(json["items"][2]["price"], 7);
    assert_eq!(json["items"][3]["price"], 3);
}

#[test]
fn test_search_by_name() {
    let ws = Workspace::new();
    let output = ws.storecart().args(["--json", "search", "an"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let names: Vec<_> = json["items"].as_array().unwrap().iter().map(|i| i["name"].clone()).collect();
    assert_eq!(names, ["banana", "mango"]);
}

#[test]
fn test_search_without_results() {
    let ws = Workspace::new();
    ws.storecart()
        .args(["search", "kiwi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_tag_search_with_hash() {
    let ws = Workspace::new();
    ws.storecart()
        .args(["tag", "#yellow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("banana"))
        .stdout(predicate::str::contains("lemon"))
        .stdout(predicate::str::contains("yellow pepper"))
        .stdout(predicate::str::contains("3 item(s)."));
}

#[test]
fn test_catalog_flag_and_json_catalog() {
    let ws = Workspace::new();
    let other = ws.path().join("other.json");
    std::fs::write(&other, r#"{"items": [{"name": "tea", "price": 4}]}"#).unwrap();

    ws.storecart()
        .args(["--catalog", other.to_str().unwrap(), "items"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tea"))
        .stdout(predicate::str::contains("apple").not());
}

#[test]
fn test_catalog_from_environment() {
    let ws = Workspace::new();
    let other = ws.path().join("env.toml");
    std::fs::write(&other, "[[items]]\nname = \"scone\"\nprice = 3\n").unwrap();

    ws.storecart()
        .env("STORECART_CATALOG", &other)
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::contains("scone"));
}

#[test]
fn test_catalog_from_config_file() {
    let ws = Workspace::new();
    let other = ws.path().join("configured.toml");
    std::fs::write(&other, "[[items]]\nname = \"bagel\"\nprice = 2\n").unwrap();

    let config_dir = ws.path().join("home").join(".storecart");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("catalog = {:?}\n", other.display().to_string()),
    )
    .unwrap();

    ws.storecart()
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::contains("bagel"));
}

#[test]
fn test_relative_config_catalog_ignores_cwd() {
    let ws = Workspace::new();
    let config_dir = ws.path().join("home").join(".storecart");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("pantry.toml"), "[[items]]\nname = \"rice\"\nprice = 8\n").unwrap();
    std::fs::write(config_dir.join("config.toml"), "catalog = \"pantry.toml\"\n").unwrap();

    ws.storecart()
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::contains("rice"))
        .stdout(predicate::str::contains("apple").not());
}

#[test]
fn test_missing_catalog_fails() {
    let ws = Workspace::new();
    ws.storecart()
        .args(["--catalog", "nowhere.toml", "items"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("nowhere.toml"));
}

#[test]
fn test_duplicate_catalog_fails() {
    let ws = Workspace::new();
    let dup = ws.path().join("dup.toml");
    std::fs::write(&dup, "[[items]]\nname = \"a\"\nprice = 1\n[[items]]\nname = \"a\"\nprice = 2\n")
        .unwrap();

    ws.storecart()
        .args(["--catalog", dup.to_str().unwrap(), "items"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate item name"));
}

// =============================================================================
// CHECKOUT
// =============================================================================

#[test]
fn test_checkout_total() {
    let ws = Workspace::new();
    ws.storecart()
        .args(["checkout", "appl", "lem", "pepper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 19"));
}

#[test]
fn test_checkout_json() {
    let ws = Workspace::new();
    let output = ws.storecart().args(["--json", "checkout", "mango", "banana"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 12);
    assert_eq!(json["items"][0]["name"], "banana");
}

#[test]
fn test_checkout_ambiguous_name_fails() {
    let ws = Workspace::new();
    ws.storecart()
        .args(["checkout", "an"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Multiple items match"))
        .stderr(predicate::str::contains("banana, mango"));
}

#[test]
fn test_checkout_same_item_twice_fails() {
    let ws = Workspace::new();
    ws.storecart()
        .args(["checkout", "apple", "appl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists in the shopping cart"));
}

#[test]
fn test_checkout_requires_names() {
    let ws = Workspace::new();
    ws.storecart().arg("checkout").assert().failure();
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_reports_origin() {
    let ws = Workspace::new();
    ws.storecart()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found)"))
        .stdout(predicate::str::contains("catalog.toml (default)"));
}

#[test]
fn test_config_json() {
    let ws = Workspace::new();
    let output = ws
        .storecart()
        .env("STORECART_CATALOG", "shop.toml")
        .args(["--json", "config"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["catalog"]["origin"], "environment");
    assert_eq!(json["catalog"]["path"], "shop.toml");
    assert_eq!(json["config_file_exists"], false);
}
