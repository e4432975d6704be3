//! Equipment commands: add, remove, and set quantities within an inventory.

use crate::cli::common::{resolve_inventory_dir, CliError, CliResult};
use crate::models::{Category, EquipmentItem, Inventory};
use crate::services::{store, Session};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Manage equipment within an inventory
#[derive(Debug, Clone, Args)]
pub struct EquipmentArgs {
    /// Equipment subcommand
    #[command(subcommand)]
    pub command: EquipmentCommand,
}

/// Equipment subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum EquipmentCommand {
    /// Add equipment to an inventory, summing with existing stock
    Add(AddEquipmentArgs),
    /// Remove equipment from an inventory, entirely or a partial quantity
    Remove(RemoveEquipmentArgs),
    /// Overwrite the stored quantity (0 deletes the entry)
    Set(SetQuantityArgs),
}

/// Add equipment to an inventory
#[derive(Debug, Clone, Args)]
pub struct AddEquipmentArgs {
    /// Inventory to operate on
    #[arg(short, long, value_name = "NAME")]
    pub inventory: String,

    /// Equipment name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Equipment category (e.g. medical, staff-equipment)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Category,

    /// Number of units to add
    #[arg(short, long, value_name = "COUNT")]
    pub quantity: u32,

    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Remove equipment from an inventory
#[derive(Debug, Clone, Args)]
pub struct RemoveEquipmentArgs {
    /// Inventory to operate on
    #[arg(short, long, value_name = "NAME")]
    pub inventory: String,

    /// Equipment name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Equipment category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Category,

    /// Number of units to remove (omit to remove the entry entirely)
    #[arg(short, long, value_name = "COUNT")]
    pub quantity: Option<u32>,

    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Overwrite the stored quantity for an equipment item
#[derive(Debug, Clone, Args)]
pub struct SetQuantityArgs {
    /// Inventory to operate on
    #[arg(short, long, value_name = "NAME")]
    pub inventory: String,

    /// Equipment name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Equipment category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Category,

    /// New quantity (0 deletes the entry)
    #[arg(short, long, value_name = "COUNT")]
    pub quantity: u32,

    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl EquipmentArgs {
    /// Execute the equipment command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            EquipmentCommand::Add(args) => args.execute(),
            EquipmentCommand::Remove(args) => args.execute(),
            EquipmentCommand::Set(args) => args.execute(),
        }
    }
}

/// Loads the session and resolves the target inventory mutably.
fn load_target<'s>(session: &'s mut Session, name: &str) -> CliResult<&'s mut Inventory> {
    session
        .get_mut(name)
        .ok_or_else(|| CliError::not_found(format!("No inventory named '{name}'")))
}

impl AddEquipmentArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let mut session = store::load_all(&dir)?;
        let inventory = load_target(&mut session, &self.inventory)?;

        let item = EquipmentItem::new(self.name.trim(), self.category)?;
        inventory.add_equipment(item.clone(), self.quantity)?;
        store::save_inventory(inventory, &dir)?;

        println!(
            "Added {} x{} to '{}' (now {})",
            item,
            self.quantity,
            self.inventory,
            inventory.quantity_of(&item)
        );
        Ok(())
    }
}

impl RemoveEquipmentArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let mut session = store::load_all(&dir)?;
        let inventory = load_target(&mut session, &self.inventory)?;

        let item = EquipmentItem::new(self.name.trim(), self.category)?;
        if !inventory.contains(&item) {
            return Err(CliError::not_found(format!(
                "No {} in '{}'",
                item, self.inventory
            )));
        }

        match self.quantity {
            Some(quantity) => inventory.remove_quantity(&item, quantity)?,
            None => inventory.remove_equipment(&item),
        }
        store::save_inventory(inventory, &dir)?;

        let remaining = inventory.quantity_of(&item);
        match self.quantity {
            Some(quantity) if remaining > 0 => {
                println!("Removed {item} x{quantity} ({remaining} left)");
            }
            _ => println!("Removed {} from '{}'", item, self.inventory),
        }
        Ok(())
    }
}

impl SetQuantityArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let mut session = store::load_all(&dir)?;
        let inventory = load_target(&mut session, &self.inventory)?;

        let item = EquipmentItem::new(self.name.trim(), self.category)?;
        inventory.set_quantity(item.clone(), self.quantity);
        store::save_inventory(inventory, &dir)?;

        if self.quantity == 0 {
            println!("Removed {} from '{}'", item, self.inventory);
        } else {
            println!("Set {} to x{} in '{}'", item, self.quantity, self.inventory);
        }
        Ok(())
    }
}