//! CLI command handlers for Stockroom.
//!
//! This module provides headless, scriptable access to the inventory core
//! for shell use, automation, and testing.

pub mod category;
pub mod common;
pub mod equipment;
pub mod inventory;

// Re-export types used by main.rs and tests
pub use category::CategoryArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use equipment::EquipmentArgs;
pub use inventory::InventoryArgs;
