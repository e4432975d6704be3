//! Stockroom - desktop equipment inventory manager.
//!
//! Inventories are named collections of equipment items, each persisted as
//! one JSON file. The CLI front end drives the core create/add/remove/save
//! operations; see `stockroom --help` for the command tree.

use clap::{Parser, Subcommand};
use stockroom::cli::{CategoryArgs, EquipmentArgs, InventoryArgs};
use tracing_subscriber::EnvFilter;

/// Stockroom - equipment inventory manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage inventories (list, create, show, delete)
    Inventory(InventoryArgs),
    /// Manage equipment within an inventory
    Equipment(EquipmentArgs),
    /// Inspect the fixed equipment categories
    Category(CategoryArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inventory(args) => args.execute(),
        Commands::Equipment(args) => args.execute(),
        Commands::Category(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}
