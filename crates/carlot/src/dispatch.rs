//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Dispatch is trait-based and split by whether a command needs the
//! loaded inventory: configuration and completions run without touching
//! the dataset, while list/makes/colors require it.

use carlot_inventory_rs::Inventory;

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that can be executed without the inventory.
pub trait NoInventoryCommand {
    /// Execute the command without requiring the dataset.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that operate on the loaded inventory.
pub trait InventoryCommand {
    /// Execute the command against the loaded inventory.
    fn execute(&self, ctx: &CommandContext, inventory: &Inventory) -> Result<()>;
}

/// A CLI invocation routed to the dispatcher that will handle it.
pub enum Dispatch<'a> {
    NoInventory(NoInventoryDispatch<'a>),
    Inventory(InventoryDispatch<'a>),
}

impl<'a> Dispatch<'a> {
    /// Routes the command to exactly one dispatcher.
    ///
    /// The match is exhaustive over the command surface, so a new command
    /// cannot be left unrouted.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::List {
                year_min,
                year_max,
                make,
                mileage_min,
                mileage_max,
                price_min,
                price_max,
                color,
            }) => Self::Inventory(InventoryDispatch::List {
                year_min,
                year_max,
                make,
                mileage_min,
                mileage_max,
                price_min,
                price_max,
                color,
            }),
            Some(Commands::Makes) => Self::Inventory(InventoryDispatch::Makes),
            Some(Commands::Colors) => Self::Inventory(InventoryDispatch::Colors),
            Some(Commands::Config { command }) => {
                Self::NoInventory(NoInventoryDispatch::Config(command))
            }
            Some(Commands::Completions { shell }) => {
                Self::NoInventory(NoInventoryDispatch::Completions(shell))
            }
            None => Self::NoInventory(NoInventoryDispatch::Help),
        }
    }
}

/// Commands that don't require the inventory.
pub enum NoInventoryDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl NoInventoryCommand for NoInventoryDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("carlot - used-car inventory browser");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Edit) => commands::config::execute_edit(ctx),
    }
}

/// Commands that operate on the loaded inventory.
pub enum InventoryDispatch<'a> {
    List {
        year_min: &'a Option<String>,
        year_max: &'a Option<String>,
        make: &'a Option<String>,
        mileage_min: &'a Option<String>,
        mileage_max: &'a Option<String>,
        price_min: &'a Option<String>,
        price_max: &'a Option<String>,
        color: &'a Option<String>,
    },
    Makes,
    Colors,
}

impl InventoryCommand for InventoryDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, inventory: &Inventory) -> Result<()> {
        match self {
            Self::List {
                year_min,
                year_max,
                make,
                mileage_min,
                mileage_max,
                price_min,
                price_max,
                color,
            } => {
                let opts = commands::list::ListOptions {
                    year_min: (*year_min).clone(),
                    year_max: (*year_max).clone(),
                    make: (*make).clone(),
                    mileage_min: (*mileage_min).clone(),
                    mileage_max: (*mileage_max).clone(),
                    price_min: (*price_min).clone(),
                    price_max: (*price_max).clone(),
                    color: (*color).clone(),
                };
                commands::list::execute(ctx, &opts, inventory)
            }
            Self::Makes => commands::makes::execute(ctx, inventory),
            Self::Colors => commands::colors::execute(ctx, inventory),
        }
    }
}
