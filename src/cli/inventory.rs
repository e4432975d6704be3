//! Inventory management commands: list, create, show, delete.

use crate::cli::common::{resolve_inventory_dir, CliError, CliResult};
use crate::services::store;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage inventories
#[derive(Debug, Clone, Args)]
pub struct InventoryArgs {
    /// Inventory subcommand
    #[command(subcommand)]
    pub command: InventoryCommand,
}

/// Inventory management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum InventoryCommand {
    /// List all persisted inventories
    List(ListInventoriesArgs),
    /// Create a new empty inventory
    Create(CreateInventoryArgs),
    /// Show the contents of an inventory
    Show(ShowInventoryArgs),
    /// Delete an inventory and its backing file
    Delete(DeleteInventoryArgs),
}

/// List all persisted inventories
#[derive(Debug, Clone, Args)]
pub struct ListInventoriesArgs {
    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Create a new empty inventory
#[derive(Debug, Clone, Args)]
pub struct CreateInventoryArgs {
    /// Name of the inventory to create
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Show the contents of an inventory
#[derive(Debug, Clone, Args)]
pub struct ShowInventoryArgs {
    /// Name of the inventory to show
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Delete an inventory and its backing file
#[derive(Debug, Clone, Args)]
pub struct DeleteInventoryArgs {
    /// Name of the inventory to delete
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Inventory directory (defaults to the configured location)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ListInventoriesResponse {
    inventories: Vec<String>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct MaterialItem {
    name: String,
    id: i64,
    category: String,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct ShowInventoryResponse {
    name: String,
    materials: Vec<MaterialItem>,
    count: usize,
}

impl InventoryArgs {
    /// Execute the inventory command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            InventoryCommand::List(args) => args.execute(),
            InventoryCommand::Create(args) => args.execute(),
            InventoryCommand::Show(args) => args.execute(),
            InventoryCommand::Delete(args) => args.execute(),
        }
    }
}

impl ListInventoriesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let inventories = store::list_inventories(&dir)?;

        if self.json {
            let response = ListInventoriesResponse {
                count: inventories.len(),
                inventories,
            };
            println!("{}", to_json(&response)?);
            return Ok(());
        }

        if inventories.is_empty() {
            println!("No inventories found in {}", dir.display());
            return Ok(());
        }

        for name in &inventories {
            println!("{name}");
        }
        Ok(())
    }
}

impl CreateInventoryArgs {
    /// Execute the create command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let name = self.name.trim();

        let mut session = store::load_all(&dir)?;
        let inventory = session.create(name)?;
        store::save_inventory(inventory, &dir)?;

        println!("Created inventory '{name}'");
        Ok(())
    }
}

impl ShowInventoryArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let session = store::load_all(&dir)?;

        let inventory = session
            .get(&self.name)
            .ok_or_else(|| CliError::not_found(format!("No inventory named '{}'", self.name)))?;

        if self.json {
            let response = ShowInventoryResponse {
                name: inventory.name().to_string(),
                materials: inventory
                    .iter()
                    .map(|(item, quantity)| MaterialItem {
                        name: item.name().to_string(),
                        id: item.id(),
                        category: item.category().wire_name().to_string(),
                        quantity,
                    })
                    .collect(),
                count: inventory.len(),
            };
            println!("{}", to_json(&response)?);
            return Ok(());
        }

        println!("{}", inventory.name());
        if inventory.is_empty() {
            println!("  (empty)");
            return Ok(());
        }
        for (item, quantity) in inventory.iter() {
            println!("  {item} x{quantity}");
        }
        Ok(())
    }
}

impl DeleteInventoryArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let dir = resolve_inventory_dir(self.dir.as_deref())?;
        let mut session = store::load_all(&dir)?;

        if !session.contains(&self.name) {
            return Err(CliError::not_found(format!(
                "No inventory named '{}'",
                self.name
            )));
        }

        session.delete(&self.name, &dir)?;
        println!("Deleted inventory '{}'", self.name);
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))
}
