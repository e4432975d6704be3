//! Data models for inventories, equipment items, and categories.
//!
//! Models are independent of the persistence format and the CLI front end;
//! serialization lives in [`crate::parser`].

pub mod category;
pub mod inventory;
pub mod item;

// Re-export all model types
pub use category::Category;
pub use inventory::Inventory;
pub use item::{derive_id, EquipmentItem};
