//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::path::Path;
use std::process::Command;
use stockroom::models::{Category, EquipmentItem, Inventory};
use stockroom::services::store;

/// Path to the stockroom binary
pub fn stockroom_bin() -> String {
    std::env::var("CARGO_BIN_EXE_stockroom")
        .unwrap_or_else(|_| "target/debug/stockroom".to_string())
}

/// Creates a Command with an isolated config directory, so tests never touch
/// the real user configuration. Commands still pass `--dir` explicitly; the
/// env override is belt and braces for commands that fall back to config.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(stockroom_bin());
    cmd.env("STOCKROOM_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

/// A small stocked inventory used across tests.
pub fn clinic_inventory() -> Inventory {
    let mut inventory = Inventory::new("Clinic A").unwrap();
    inventory
        .add_equipment(EquipmentItem::new("Gloves", Category::Medical).unwrap(), 10)
        .unwrap();
    inventory
        .add_equipment(
            EquipmentItem::new("Vests", Category::StaffEquipment).unwrap(),
            4,
        )
        .unwrap();
    inventory
}

/// Persists an inventory under `dir` via the store.
pub fn write_inventory(inventory: &Inventory, dir: &Path) {
    store::save_inventory(inventory, dir).expect("Failed to write inventory fixture");
}

/// Runs a command and asserts it succeeded, returning stdout.
pub fn run_ok(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
