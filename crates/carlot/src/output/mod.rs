//! Output formatting for the carlot CLI.
//!
//! Every command renders either a human-readable listing or pretty JSON;
//! the formatting functions here are pure string builders so the output
//! region is rewritten wholesale on each invocation.

mod cars;
mod helpers;
mod options;

pub use cars::{format_cars_json, format_cars_listing};
pub use options::{format_options_json, format_options_list};
