//! Car record model.
//!
//! This module defines the `Car` struct representing a single used-car
//! listing as supplied by the inventory dataset.

use serde::{Deserialize, Serialize};

/// A single used-car listing.
///
/// Records are supplied by the hosting dataset, loaded once at startup and
/// never mutated. There is no identity field; records are compared only by
/// attribute values during filtering.
///
/// The serialized shape uses camelCase keys (`gasMileage`) to match the
/// dataset's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Model year.
    pub year: i32,

    /// Manufacturer name (e.g. "Ford").
    pub make: String,

    /// Model name (e.g. "Focus").
    pub model: String,

    /// Exterior color.
    pub color: String,

    /// Odometer reading in miles.
    pub mileage: i64,

    /// Fuel economy in miles per gallon.
    pub gas_mileage: f64,

    /// Asking price in dollars.
    pub price: f64,
}

impl Car {
    /// Returns the display name composed as `"{year} {make} {model} ({color})"`.
    pub fn display_name(&self) -> String {
        format!("{} {} {} ({})", self.year, self.make, self.model, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus() -> Car {
        Car {
            year: 2015,
            make: "Ford".to_string(),
            model: "Focus".to_string(),
            color: "Red".to_string(),
            mileage: 30000,
            gas_mileage: 32.0,
            price: 9000.0,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(focus().display_name(), "2015 Ford Focus (Red)");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "year": 2015,
            "make": "Ford",
            "model": "Focus",
            "color": "Red",
            "mileage": 30000,
            "gasMileage": 32,
            "price": 9000
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car, focus());
    }

    #[test]
    fn test_serialize_round_trip_keeps_camel_case() {
        let json = serde_json::to_string(&focus()).unwrap();
        assert!(json.contains("\"gasMileage\""));
        assert!(!json.contains("gas_mileage"));
        let back: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(back, focus());
    }
}
