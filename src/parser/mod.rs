//! Parsing and serialization for the persisted inventory file format.

pub mod inventory_json;

// Re-export commonly used functions
pub use inventory_json::{from_json_bytes, load_inventory, save_inventory, to_json_bytes};
