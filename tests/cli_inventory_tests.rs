//! End-to-end tests for `stockroom inventory` commands.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_create_then_list() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    let stdout = run_ok(&mut isolated_command(
        &["inventory", "create", "Clinic A", "--dir", &dir],
        temp_dir.path(),
    ));
    assert!(stdout.contains("Created inventory 'Clinic A'"));

    let stdout = run_ok(&mut isolated_command(
        &["inventory", "list", "--dir", &dir],
        temp_dir.path(),
    ));
    assert!(stdout.contains("Clinic A"));
}

#[test]
fn test_create_writes_backing_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    run_ok(&mut isolated_command(
        &["inventory", "create", "Clinic A", "--dir", &dir],
        temp_dir.path(),
    ));

    let path = temp_dir.path().join("Clinic A.json");
    assert!(path.is_file(), "backing file should exist");

    let value: serde_json::Value =
        serde_json::from_slice(&fs::read(&path).unwrap()).expect("Should be valid JSON");
    assert_eq!(value["name"], "Clinic A");
    assert!(value["materials"].as_array().unwrap().is_empty());
}

#[test]
fn test_create_duplicate_fails() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    run_ok(&mut isolated_command(
        &["inventory", "create", "Clinic A", "--dir", &dir],
        temp_dir.path(),
    ));

    let output = isolated_command(
        &["inventory", "create", "Clinic A", "--dir", &dir],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
}

#[test]
fn test_list_json_format() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    write_inventory(&clinic_inventory(), temp_dir.path());

    let stdout = run_ok(&mut isolated_command(
        &["inventory", "list", "--dir", &dir, "--json"],
        temp_dir.path(),
    ));

    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(result["count"], 1);
    assert_eq!(result["inventories"][0], "Clinic A");
}

#[test]
fn test_list_skips_malformed_files() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    write_inventory(&clinic_inventory(), temp_dir.path());
    fs::write(temp_dir.path().join("broken.json"), b"{ not json").unwrap();

    let stdout = run_ok(&mut isolated_command(
        &["inventory", "list", "--dir", &dir, "--json"],
        temp_dir.path(),
    ));

    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["count"], 1);
}

#[test]
fn test_show_json_format() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    write_inventory(&clinic_inventory(), temp_dir.path());

    let stdout = run_ok(&mut isolated_command(
        &["inventory", "show", "Clinic A", "--dir", &dir, "--json"],
        temp_dir.path(),
    ));

    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["name"], "Clinic A");
    assert_eq!(result["count"], 2);
    assert_eq!(result["materials"][0]["name"], "Gloves");
    assert_eq!(result["materials"][0]["category"], "MEDICAL");
    assert_eq!(result["materials"][0]["quantity"], 10);
    assert!(result["materials"][0]["id"].is_i64());
}

#[test]
fn test_show_missing_inventory_fails() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    let output = isolated_command(
        &["inventory", "show", "Nowhere", "--dir", &dir],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_delete_removes_file_and_listing() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap().to_string();

    write_inventory(&clinic_inventory(), temp_dir.path());

    run_ok(&mut isolated_command(
        &["inventory", "delete", "Clinic A", "--dir", &dir],
        temp_dir.path(),
    ));

    assert!(!temp_dir.path().join("Clinic A.json").exists());

    let stdout = run_ok(&mut isolated_command(
        &["inventory", "list", "--dir", &dir, "--json"],
        temp_dir.path(),
    ));
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["count"], 0);

    // Second delete: nothing left to forget.
    let output = isolated_command(
        &["inventory", "delete", "Clinic A", "--dir", &dir],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(3));
}
