//! Inventory container: ordered equipment-to-quantity entries.

use crate::error::{InventoryError, Result};
use crate::models::EquipmentItem;
use indexmap::IndexMap;

/// A named, insertion-ordered collection of equipment entries.
///
/// Every stored quantity is at least 1: operations that would drop a quantity
/// to zero delete the entry instead. Entries keep the position at which their
/// item was first seen; deleting an entry never reorders the rest.
///
/// Single-threaded use is assumed. All operations are in-memory; persistence
/// lives in [`crate::parser::inventory_json`] and [`crate::services::store`].
#[derive(Debug, Clone)]
pub struct Inventory {
    name: String,
    entries: IndexMap<EquipmentItem, u32>,
}

impl Inventory {
    /// Creates an empty inventory with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidArgument`] if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::invalid("inventory name cannot be empty"));
        }

        Ok(Self {
            name,
            entries: IndexMap::new(),
        })
    }

    /// The inventory name, also used as the filename stem on disk.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds `quantity` units of `item`, summing with any existing entry.
    ///
    /// A new item is appended after all existing entries; an existing item
    /// keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidArgument`] if `quantity` is zero or
    /// the summed quantity would overflow. Nothing is mutated on error.
    pub fn add_equipment(&mut self, item: EquipmentItem, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(InventoryError::invalid("quantity must be positive"));
        }

        let current = self.quantity_of(&item);
        let total = current
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::invalid("quantity overflow"))?;

        self.entries.insert(item, total);
        Ok(())
    }

    /// The stored quantity for `item`, or 0 if absent. Never fails.
    pub fn quantity_of(&self, item: &EquipmentItem) -> u32 {
        self.entries.get(item).copied().unwrap_or(0)
    }

    /// Sets the quantity for `item`, overwriting any existing entry.
    ///
    /// A quantity of 0 deletes the entry (no-op if absent). An existing item
    /// keeps its insertion position; a new one is appended.
    pub fn set_quantity(&mut self, item: EquipmentItem, quantity: u32) {
        if quantity == 0 {
            self.entries.shift_remove(&item);
        } else {
            self.entries.insert(item, quantity);
        }
    }

    /// Deletes the entry for `item`. No-op if absent.
    pub fn remove_equipment(&mut self, item: &EquipmentItem) {
        self.entries.shift_remove(item);
    }

    /// Removes `quantity` units of `item`, deleting the entry when the count
    /// reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidArgument`] if `quantity` is zero or
    /// exceeds the stored quantity. Nothing is mutated on error.
    pub fn remove_quantity(&mut self, item: &EquipmentItem, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(InventoryError::invalid("remove quantity must be positive"));
        }

        let current = self.quantity_of(item);
        if quantity > current {
            return Err(InventoryError::invalid(format!(
                "remove quantity exceeds current quantity ({current})"
            )));
        }

        if quantity == current {
            self.entries.shift_remove(item);
        } else if let Some(stored) = self.entries.get_mut(item) {
            *stored -= quantity;
        }
        Ok(())
    }

    /// Returns `true` if `item` has an entry.
    pub fn contains(&self, item: &EquipmentItem) -> bool {
        self.entries.contains_key(item)
    }

    /// An owned snapshot of all entries in insertion order.
    ///
    /// Mutating the inventory afterwards does not affect a snapshot already
    /// taken.
    pub fn entries(&self) -> Vec<(EquipmentItem, u32)> {
        self.entries
            .iter()
            .map(|(item, quantity)| (item.clone(), *quantity))
            .collect()
    }

    /// Iterates over entries in insertion order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = (&EquipmentItem, u32)> + '_ {
        self.entries.iter().map(|(item, quantity)| (item, *quantity))
    }

    /// The number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the inventory holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
