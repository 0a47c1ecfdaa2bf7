//! Makes command implementation.
//!
//! Lists the distinct makes present in the inventory, used to drive the
//! exact-match `--make` filter.

use carlot_inventory_rs::Inventory;

use super::{CommandContext, Result};
use crate::output::{format_options_json, format_options_list};

/// Executes the makes command.
pub fn execute(ctx: &CommandContext, inventory: &Inventory) -> Result<()> {
    let makes = inventory.distinct_makes();

    if ctx.json_output {
        let output = format_options_json("makes", &makes)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_options_list(&makes, "No makes found.");
        print!("{output}");
    }

    Ok(())
}
