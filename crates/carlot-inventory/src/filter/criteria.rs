//! Filter criteria and predicate evaluation.

use crate::Car;

/// A transient set of optional filter bounds, built fresh on each filter
/// action.
///
/// Each numeric bound is an explicit `Option<i64>` and each exact-match
/// field an `Option<String>`; `None` imposes no constraint. A criteria
/// with all fields absent matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Minimum model year (inclusive).
    pub min_year: Option<i64>,
    /// Maximum model year (inclusive).
    pub max_year: Option<i64>,
    /// Exact-match make, case-sensitive.
    pub make: Option<String>,
    /// Minimum mileage (inclusive).
    pub min_mileage: Option<i64>,
    /// Maximum mileage (inclusive).
    pub max_mileage: Option<i64>,
    /// Minimum price (inclusive).
    pub min_price: Option<i64>,
    /// Maximum price (inclusive).
    pub max_price: Option<i64>,
    /// Exact-match color, case-sensitive.
    pub color: Option<String>,
}

impl FilterCriteria {
    /// Returns true if no field imposes a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.min_year.is_none()
            && self.max_year.is_none()
            && self.make.is_none()
            && self.min_mileage.is_none()
            && self.max_mileage.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.color.is_none()
    }

    /// Returns true if the car satisfies every present bound.
    ///
    /// Checks short-circuit on the first failing bound. A present bound of
    /// value zero is checked like any other value.
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(min_year) = self.min_year {
            if i64::from(car.year) < min_year {
                return false;
            }
        }

        if let Some(max_year) = self.max_year {
            if i64::from(car.year) > max_year {
                return false;
            }
        }

        if let Some(ref make) = self.make {
            if car.make != *make {
                return false;
            }
        }

        if let Some(min_mileage) = self.min_mileage {
            if car.mileage < min_mileage {
                return false;
            }
        }

        if let Some(max_mileage) = self.max_mileage {
            if car.mileage > max_mileage {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if car.price < min_price as f64 {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if car.price > max_price as f64 {
                return false;
            }
        }

        if let Some(ref color) = self.color {
            if car.color != *color {
                return false;
            }
        }

        true
    }

    /// Returns the ordered subsequence of cars satisfying every present
    /// bound.
    ///
    /// Dataset order is preserved; there is no deduplication or sorting.
    /// An empty result is a normal outcome, not an error.
    pub fn apply<'a>(&self, cars: &'a [Car]) -> Vec<&'a Car> {
        cars.iter().filter(|car| self.matches(car)).collect()
    }
}
