//! In-memory registry of loaded inventories.

use crate::error::{InventoryError, Result};
use crate::models::Inventory;
use crate::services::store;
use indexmap::IndexMap;
use std::path::Path;

/// The set of inventories loaded in this session, keyed by name.
///
/// Explicit session state owned by the presentation layer; there is no global
/// registry. The registry preserves insertion order so listings are stable.
#[derive(Debug, Default)]
pub struct Session {
    inventories: IndexMap<String, Inventory>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a new empty inventory.
    ///
    /// # Errors
    ///
    /// [`InventoryError::DuplicateName`] if the name is already registered,
    /// [`InventoryError::InvalidArgument`] if the name is empty.
    pub fn create(&mut self, name: &str) -> Result<&mut Inventory> {
        let inventory = Inventory::new(name)?;
        if self.inventories.contains_key(inventory.name()) {
            return Err(InventoryError::DuplicateName(name.to_string()));
        }

        let key = inventory.name().to_string();
        Ok(self.inventories.entry(key).or_insert(inventory))
    }

    /// Registers an inventory under its own name, replacing any previous
    /// entry with that name.
    pub fn insert(&mut self, inventory: Inventory) {
        self.inventories
            .insert(inventory.name().to_string(), inventory);
    }

    /// Looks up an inventory by name.
    pub fn get(&self, name: &str) -> Option<&Inventory> {
        self.inventories.get(name)
    }

    /// Looks up an inventory by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Inventory> {
        self.inventories.get_mut(name)
    }

    /// Returns `true` if an inventory with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.inventories.contains_key(name)
    }

    /// Registered inventory names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inventories.keys().map(String::as_str)
    }

    /// The number of registered inventories.
    pub fn len(&self) -> usize {
        self.inventories.len()
    }

    /// Returns `true` if no inventories are registered.
    pub fn is_empty(&self) -> bool {
        self.inventories.is_empty()
    }

    /// Deletes the backing file for `name` under `dir`, then forgets the
    /// registry entry.
    ///
    /// If deleting an existing file fails the entry is retained, so the
    /// session never forgets an inventory whose file is still on disk.
    /// An unregistered name only triggers the file cleanup.
    ///
    /// # Errors
    ///
    /// [`InventoryError::Io`] if an existing backing file cannot be removed.
    pub fn delete(&mut self, name: &str, dir: &Path) -> Result<()> {
        store::delete_inventory_file(name, dir)?;
        self.inventories.shift_remove(name);
        Ok(())
    }
}
