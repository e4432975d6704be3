//! Category inspection commands.
//!
//! The category set is a closed enum, so the only operation is listing it
//! (wire name plus display label) for pickers and scripts.

use crate::cli::common::{CliError, CliResult};
use crate::models::Category;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect the fixed equipment categories
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    List(ListCategoriesArgs),
}

/// List all categories
#[derive(Debug, Clone, Args)]
pub struct ListCategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryItem {
    id: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CategoryCommand::List(args) => args.execute(),
        }
    }
}

impl ListCategoriesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            let response = ListCategoriesResponse {
                categories: Category::ALL
                    .into_iter()
                    .map(|category| CategoryItem {
                        id: category.wire_name(),
                        label: category.label(),
                    })
                    .collect(),
                count: Category::ALL.len(),
            };
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        for category in Category::ALL {
            println!("{:<18} {}", category.wire_name(), category.label());
        }
        Ok(())
    }
}
