use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod dispatch;
mod output;

use carlot_inventory_rs::InventoryStore;
use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{Dispatch, InventoryCommand, NoInventoryCommand};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match Dispatch::from_cli(cli) {
        // Config, completions, and bare help never touch the dataset.
        Dispatch::NoInventory(dispatch) => dispatch.execute(&ctx),
        Dispatch::Inventory(dispatch) => {
            let path = resolve_inventory(cli)?;
            if ctx.verbose {
                eprintln!("Loading inventory from {}", path.display());
            }
            let inventory = InventoryStore::with_path(path).load()?;
            dispatch.execute(&ctx, &inventory)
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "INVENTORY_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Store(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

/// Resolves the inventory file path with priority: flag > env > config.
///
/// The resolution order is:
/// 1. `--inventory` command line flag (clap also handles the
///    `CARLOT_INVENTORY` env var via `env = "CARLOT_INVENTORY"`)
/// 2. `inventory` key in the config file (`~/.config/carlot/config.toml`)
fn resolve_inventory(cli: &Cli) -> commands::Result<PathBuf> {
    // Flag takes highest priority. When cli.inventory is Some, it's either
    // from --inventory OR from the CARLOT_INVENTORY env var.
    if let Some(path) = &cli.inventory {
        return Ok(path.clone());
    }

    match load_config() {
        Ok(config) => {
            if let Some(path) = config.inventory {
                return Ok(PathBuf::from(path));
            }
        }
        Err(_) => {
            // Config loading failed, fall through to the error below
        }
    }

    Err(CommandError::Config(
        "no inventory file configured; pass --inventory, set CARLOT_INVENTORY, \
         or set `inventory` in the config file"
            .to_string(),
    ))
}
