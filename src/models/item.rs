//! Equipment item identity.

use crate::error::{InventoryError, Result};
use crate::models::Category;
use std::fmt;
use std::hash::{Hash, Hasher};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Immutable value identifying a kind of equipment by name and category.
///
/// The numeric `id` is derived deterministically from the name and category
/// at construction time and persisted verbatim, so a freshly created item and
/// one loaded from disk agree even though the id is never recomputed on load.
/// Identity (equality and hashing) is the (name, category) pair alone; the id
/// is carried for display and the wire format only.
#[derive(Debug, Clone)]
pub struct EquipmentItem {
    name: String,
    id: i64,
    category: Category,
}

impl EquipmentItem {
    /// Creates an item from a name and category, deriving the id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidArgument`] if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, category: Category) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let id = derive_id(&name, category);
        Ok(Self { name, id, category })
    }

    /// Reconstructs an item from persisted fields, restoring the id verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidArgument`] if the name is empty or
    /// whitespace-only.
    pub fn from_parts(name: impl Into<String>, id: i64, category: Category) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(Self { name, id, category })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(InventoryError::invalid("equipment name cannot be empty"));
        }
        Ok(())
    }

    /// The equipment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The derived numeric id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The equipment category.
    pub fn category(&self) -> Category {
        self.category
    }
}

// Identity is (name, category) only; the derived id is never consulted.
impl PartialEq for EquipmentItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.category == other.category
    }
}

impl Eq for EquipmentItem {}

impl Hash for EquipmentItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.category.hash(state);
    }
}

impl fmt::Display for EquipmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Derives the numeric id for a (name, category) pair.
///
/// FNV-1a over the name bytes, a separator, and the category wire name.
/// Pure and unsalted: the same pair always yields the same id, in any
/// process, so independently constructed items agree.
pub fn derive_id(name: &str, category: Category) -> i64 {
    let mut hash = FNV_OFFSET;
    for byte in name
        .bytes()
        .chain(std::iter::once(0))
        .chain(category.wire_name().bytes())
    {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_id() {
        let item = EquipmentItem::new("Gloves", Category::Medical).unwrap();
        assert_eq!(item.name(), "Gloves");
        assert_eq!(item.category(), Category::Medical);
        assert_eq!(item.id(), derive_id("Gloves", Category::Medical));
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(EquipmentItem::new("", Category::Other).is_err());
        assert!(EquipmentItem::new("   ", Category::Other).is_err());
        assert!(EquipmentItem::from_parts("", 42, Category::Other).is_err());
    }

    #[test]
    fn test_derive_id_is_stable() {
        let a = derive_id("Mop", Category::Maintenance);
        let b = derive_id("Mop", Category::Maintenance);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_id_depends_on_category() {
        assert_ne!(
            derive_id("Gloves", Category::Medical),
            derive_id("Gloves", Category::StaffEquipment)
        );
    }

    #[test]
    fn test_equality_ignores_id() {
        let fresh = EquipmentItem::new("Gloves", Category::Medical).unwrap();
        let loaded = EquipmentItem::from_parts("Gloves", 12345, Category::Medical).unwrap();
        assert_eq!(fresh, loaded);

        let other_category = EquipmentItem::new("Gloves", Category::StaffEquipment).unwrap();
        assert_ne!(fresh, other_category);

        let other_name = EquipmentItem::new("Masks", Category::Medical).unwrap();
        assert_ne!(fresh, other_name);
    }

    #[test]
    fn test_equal_items_are_interchangeable_map_keys() {
        use std::collections::HashMap;

        let fresh = EquipmentItem::new("Gloves", Category::Medical).unwrap();
        let loaded = EquipmentItem::from_parts("Gloves", -7, Category::Medical).unwrap();

        let mut map = HashMap::new();
        map.insert(fresh, 10u32);
        assert_eq!(map.get(&loaded), Some(&10));
    }

    #[test]
    fn test_display() {
        let item = EquipmentItem::new("Gloves", Category::Medical).unwrap();
        assert_eq!(item.to_string(), "Gloves (Medical equipment)");
    }
}
