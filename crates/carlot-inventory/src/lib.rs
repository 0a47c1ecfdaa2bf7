//! In-memory used-car inventory with filtering support.
//!
//! This crate provides the data model and filtering logic for a read-only
//! used-car inventory: the [`Car`] record, the owning [`Inventory`]
//! collection with distinct-value extraction for populating choice lists,
//! the [`InventoryStore`] that loads the dataset from disk, and the
//! [`filter`] module with the free-text bound parser and the
//! [`FilterCriteria`](filter::FilterCriteria) predicate evaluator.
//!
//! # Example
//!
//! ```
//! use carlot_inventory_rs::{Car, Inventory};
//! use carlot_inventory_rs::filter::FilterCriteria;
//!
//! let inventory = Inventory::new(vec![Car {
//!     year: 2015,
//!     make: "Ford".to_string(),
//!     model: "Focus".to_string(),
//!     color: "Red".to_string(),
//!     mileage: 30000,
//!     gas_mileage: 32.0,
//!     price: 9000.0,
//! }]);
//!
//! let criteria = FilterCriteria {
//!     make: Some("Ford".to_string()),
//!     ..FilterCriteria::default()
//! };
//! let results = criteria.apply(inventory.cars());
//! assert_eq!(results.len(), 1);
//! ```

pub mod filter;
mod model;
mod store;

pub use model::Car;
pub use store::{InventoryStore, InventoryStoreError};

/// An ordered, read-only collection of car listings.
///
/// The inventory is loaded once at startup and never mutated. Iteration
/// and filtering always preserve the original dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    cars: Vec<Car>,
}

impl Inventory {
    /// Creates an inventory from an ordered list of cars.
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// Returns the cars in dataset order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Returns the number of listings.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Returns true if the inventory holds no listings.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Returns the distinct makes present, sorted ascending.
    pub fn distinct_makes(&self) -> Vec<String> {
        self.distinct_values(|car| &car.make)
    }

    /// Returns the distinct colors present, sorted ascending.
    pub fn distinct_colors(&self) -> Vec<String> {
        self.distinct_values(|car| &car.color)
    }

    /// Extracts the sorted, deduplicated values of one string field.
    fn distinct_values<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Car) -> &str,
    {
        let mut values: Vec<String> = self.cars.iter().map(|car| field(car).to_string()).collect();
        values.sort();
        values.dedup();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(make: &str, color: &str) -> Car {
        Car {
            year: 2015,
            make: make.to_string(),
            model: "Test".to_string(),
            color: color.to_string(),
            mileage: 10000,
            gas_mileage: 30.0,
            price: 10000.0,
        }
    }

    #[test]
    fn test_distinct_makes_sorted_and_deduplicated() {
        let inventory = Inventory::new(vec![
            car("Ford", "Red"),
            car("Honda", "Blue"),
            car("Ford", "Black"),
        ]);
        assert_eq!(inventory.distinct_makes(), vec!["Ford", "Honda"]);
    }

    #[test]
    fn test_distinct_colors_sorted_and_deduplicated() {
        let inventory = Inventory::new(vec![
            car("Ford", "Red"),
            car("Honda", "Blue"),
            car("Ford", "Blue"),
        ]);
        assert_eq!(inventory.distinct_colors(), vec!["Blue", "Red"]);
    }

    #[test]
    fn test_distinct_values_empty_inventory() {
        let inventory = Inventory::default();
        assert!(inventory.distinct_makes().is_empty());
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }
}
