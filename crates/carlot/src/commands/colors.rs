//! Colors command implementation.
//!
//! Lists the distinct colors present in the inventory, used to drive the
//! exact-match `--color` filter.

use carlot_inventory_rs::Inventory;

use super::{CommandContext, Result};
use crate::output::{format_options_json, format_options_list};

/// Executes the colors command.
pub fn execute(ctx: &CommandContext, inventory: &Inventory) -> Result<()> {
    let colors = inventory.distinct_colors();

    if ctx.json_output {
        let output = format_options_json("colors", &colors)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_options_list(&colors, "No colors found.");
        print!("{output}");
    }

    Ok(())
}
