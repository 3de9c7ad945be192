//! CLI Tests
//!
//! Tests for the pylons-item binary: JSON in, wire bytes out, and back.

use std::fs;
use std::process::{Command, Output};

use pylons_item::{Item, Message};
use serde_json::{json, Value};
use tempfile::TempDir;

fn pylons_item(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pylons-item"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_then_decode() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("item.json");
    let bin_path = dir.path().join("item.bin");
    fs::write(&json_path, r#"{"ID": "item-1", "cookbook_id": "cb-1", "tradeable": true}"#).unwrap();

    let output = pylons_item(&[
        "encode",
        "--kind",
        "item",
        "--input",
        json_path.to_str().unwrap(),
        "--output",
        bin_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let item = Item::decode(&fs::read(&bin_path).unwrap()).unwrap();
    assert_eq!(item.id, "item-1");
    assert_eq!(item.cookbook_id, "cb-1");
    assert!(item.tradeable);

    let output = pylons_item(&[
        "--compact",
        "decode",
        "--kind",
        "item",
        "--input",
        bin_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, item.to_json());
    assert_eq!(printed["cookbookID"], json!("cb-1"));
}

#[test]
fn test_encode_rejects_invalid_utf8_json() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("bad.json");
    let bin_path = dir.path().join("bad.bin");
    // 0xFF can never appear in UTF-8 text
    fs::write(&json_path, b"{\"ID\": \"item-\xFF\"}").unwrap();

    let output = pylons_item(&[
        "encode",
        "--input",
        json_path.to_str().unwrap(),
        "--output",
        bin_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON parse error"));
    assert!(!bin_path.exists());
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_malformed_bytes_fails() {
    let dir = TempDir::new().unwrap();
    let bin_path = dir.path().join("bad.bin");
    // creator declares 5 bytes, 1 present
    fs::write(&bin_path, [0x0A, 0x05, b'a']).unwrap();

    let output = pylons_item(&["decode", "--input", bin_path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Decode error"));
    assert!(output.stdout.is_empty());
}
