//! Inventory file store.
//!
//! Directory-level persistence: one `<name>.json` file per inventory under a
//! base directory. All operations take the directory explicitly so callers
//! (and tests) control where state lives.

use crate::constants::INVENTORY_FILE_EXT;
use crate::error::Result;
use crate::models::Inventory;
use crate::parser::inventory_json;
use crate::services::Session;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The backing file path for an inventory name under `dir`.
pub fn inventory_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{INVENTORY_FILE_EXT}"))
}

/// Parses every readable inventory file under `dir`, in filename order.
///
/// Files that cannot be read or parsed are skipped with a logged warning;
/// one bad file never blocks the rest. A missing directory yields an empty
/// list.
fn read_dir_inventories(dir: &Path) -> Result<Vec<Inventory>> {
    let mut inventories = Vec::new();

    if !dir.exists() {
        return Ok(inventories);
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(INVENTORY_FILE_EXT)
        })
        .collect();
    paths.sort();

    for path in paths {
        match inventory_json::load_inventory(&path) {
            Ok(inventory) => inventories.push(inventory),
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping unreadable inventory file");
            }
        }
    }

    Ok(inventories)
}

/// Lists the names of all inventories persisted under `dir`.
///
/// The name is the one stored inside each file, not the filename stem.
pub fn list_inventories(dir: &Path) -> Result<Vec<String>> {
    Ok(read_dir_inventories(dir)?
        .into_iter()
        .map(|inventory| inventory.name().to_string())
        .collect())
}

/// Loads every readable inventory under `dir` into a fresh [`Session`].
///
/// The registry is keyed by each file's persisted name; if two files carry
/// the same name, the later one (in filename order) wins.
pub fn load_all(dir: &Path) -> Result<Session> {
    let mut session = Session::new();
    for inventory in read_dir_inventories(dir)? {
        session.insert(inventory);
    }
    Ok(session)
}

/// Writes `<name>.json` for the inventory under `dir`, creating the
/// directory if needed.
pub fn save_inventory(inventory: &Inventory, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = inventory_path(dir, inventory.name());
    inventory_json::save_inventory(inventory, &path)?;
    debug!(file = %path.display(), "saved inventory");
    Ok(())
}

/// Removes the backing file for `name` under `dir`.
///
/// A missing file is fine; a file that exists but cannot be deleted is an
/// [`crate::error::InventoryError::Io`].
pub fn delete_inventory_file(name: &str, dir: &Path) -> Result<()> {
    let path = inventory_path(dir, name);
    if path.exists() {
        fs::remove_file(&path)?;
        debug!(file = %path.display(), "deleted inventory file");
    }
    Ok(())
}
