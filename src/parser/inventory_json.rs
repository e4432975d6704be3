//! Inventory JSON wire format.
//!
//! One file per inventory: a top-level object carrying the inventory name and
//! a `materials` array of material/quantity records in insertion order.
//!
//! ```json
//! {
//!   "name": "Clinic A",
//!   "materials": [
//!     {
//!       "material": {
//!         "materialName": "Gloves",
//!         "materialId": 1234,
//!         "materialType": "MEDICAL"
//!       },
//!       "quantity": 10
//!     }
//!   ]
//! }
//! ```
//!
//! Loading is strict: a missing required field, a wrong type, an unknown
//! `materialType`, or a non-positive quantity fails with
//! [`InventoryError::MalformedData`] and yields no partial inventory.
//! Unknown extra fields are ignored.

use crate::error::{InventoryError, Result};
use crate::models::{Category, EquipmentItem, Inventory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct InventoryFile {
    name: String,
    materials: Vec<MaterialEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MaterialEntry {
    material: MaterialRecord,
    quantity: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialRecord {
    material_name: String,
    material_id: i64,
    material_type: Category,
}

/// Serializes an inventory to pretty-printed JSON bytes.
pub fn to_json_bytes(inventory: &Inventory) -> Result<Vec<u8>> {
    let file = InventoryFile {
        name: inventory.name().to_string(),
        materials: inventory
            .iter()
            .map(|(item, quantity)| MaterialEntry {
                material: MaterialRecord {
                    material_name: item.name().to_string(),
                    material_id: item.id(),
                    material_type: item.category(),
                },
                quantity,
            })
            .collect(),
    };

    serde_json::to_vec_pretty(&file).map_err(|err| InventoryError::malformed(err.to_string()))
}

/// Parses an inventory from JSON bytes.
///
/// Duplicate materials follow map semantics: the first occurrence keeps its
/// position, the last quantity wins.
///
/// # Errors
///
/// [`InventoryError::MalformedData`] on any structural problem; the input is
/// never partially applied.
pub fn from_json_bytes(bytes: &[u8]) -> Result<Inventory> {
    let file: InventoryFile =
        serde_json::from_slice(bytes).map_err(|err| InventoryError::malformed(err.to_string()))?;

    let mut inventory = Inventory::new(file.name)
        .map_err(|err| InventoryError::malformed(err.to_string()))?;

    for entry in file.materials {
        if entry.quantity == 0 {
            return Err(InventoryError::malformed(format!(
                "material '{}' has non-positive quantity",
                entry.material.material_name
            )));
        }

        let item = EquipmentItem::from_parts(
            entry.material.material_name,
            entry.material.material_id,
            entry.material.material_type,
        )
        .map_err(|err| InventoryError::malformed(err.to_string()))?;

        inventory.set_quantity(item, entry.quantity);
    }

    Ok(inventory)
}

/// Reads and parses the inventory file at `path`.
///
/// # Errors
///
/// [`InventoryError::Io`] if the file cannot be read,
/// [`InventoryError::MalformedData`] if its contents are invalid.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let bytes = fs::read(path)?;
    from_json_bytes(&bytes)
}

/// Writes the inventory to `path` as pretty-printed JSON.
///
/// The write is a plain blocking file write; there is no temp-file-and-rename
/// step, so a crash mid-write can leave a truncated file.
pub fn save_inventory(inventory: &Inventory, path: &Path) -> Result<()> {
    let bytes = to_json_bytes(inventory)?;
    fs::write(path, bytes)?;
    Ok(())
}
