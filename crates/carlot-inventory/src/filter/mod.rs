//! Filter parsing and predicate evaluation for car listings.
//!
//! This module converts raw free-text filter input into optional numeric
//! bounds and applies a set of bounds to the inventory.
//!
//! # Bounds
//!
//! Every numeric bound is an explicit `Option<i64>`: `None` means "no
//! constraint" and `Some(0)` is a real bound. Presence is never tested by
//! truthiness, so a zero bound is enforced like any other value.
//!
//! # Example
//!
//! ```
//! use carlot_inventory_rs::filter::{parse_bound, FilterCriteria};
//!
//! // Free text degrades gracefully: the first digit run wins.
//! assert_eq!(parse_bound("around 30000 miles"), Some(30000));
//! assert_eq!(parse_bound("   "), None);
//!
//! let criteria = FilterCriteria {
//!     min_year: parse_bound("2010"),
//!     ..FilterCriteria::default()
//! };
//! assert_eq!(criteria.min_year, Some(2010));
//! ```

mod criteria;
mod parser;

pub use criteria::FilterCriteria;
pub use parser::parse_bound;
