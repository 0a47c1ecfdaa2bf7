//! List command implementation.
//!
//! Filters the inventory by the raw values supplied on the command line
//! and renders the matching listings.

use carlot_inventory_rs::filter::{parse_bound, FilterCriteria};
use carlot_inventory_rs::Inventory;

use super::{CommandContext, Result};
use crate::output::{format_cars_json, format_cars_listing};

/// Options for the list command, holding the raw filter text as typed.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Raw minimum-year text.
    pub year_min: Option<String>,
    /// Raw maximum-year text.
    pub year_max: Option<String>,
    /// Make selection.
    pub make: Option<String>,
    /// Raw minimum-mileage text.
    pub mileage_min: Option<String>,
    /// Raw maximum-mileage text.
    pub mileage_max: Option<String>,
    /// Raw minimum-price text.
    pub price_min: Option<String>,
    /// Raw maximum-price text.
    pub price_max: Option<String>,
    /// Color selection.
    pub color: Option<String>,
}

/// Executes the list command.
///
/// Raw numeric inputs go through the free-text bound parser; malformed
/// values degrade to "no bound" and an empty match set is a normal
/// outcome rendered as "No results found.", not an error.
pub fn execute(ctx: &CommandContext, opts: &ListOptions, inventory: &Inventory) -> Result<()> {
    let criteria = build_criteria(opts);

    if ctx.verbose {
        eprintln!(
            "Filtering {} listings (constrained: {})",
            inventory.len(),
            !criteria.is_unconstrained()
        );
    }

    let results = criteria.apply(inventory.cars());

    if ctx.json_output {
        let output = format_cars_json(&results)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_cars_listing(&results, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Builds filter criteria from the raw option text.
fn build_criteria(opts: &ListOptions) -> FilterCriteria {
    FilterCriteria {
        min_year: bound(&opts.year_min),
        max_year: bound(&opts.year_max),
        make: selection(&opts.make),
        min_mileage: bound(&opts.mileage_min),
        max_mileage: bound(&opts.mileage_max),
        min_price: bound(&opts.price_min),
        max_price: bound(&opts.price_max),
        color: selection(&opts.color),
    }
}

/// Parses raw bound text; absent or malformed text imposes no bound.
fn bound(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(parse_bound)
}

/// Normalizes an exact-match selection; an empty string means "any",
/// mirroring an unselected dropdown.
fn selection(raw: &Option<String>) -> Option<String> {
    raw.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}
