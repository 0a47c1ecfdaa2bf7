//! Car listing output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use carlot_inventory_rs::Car;

use super::helpers::format_amount;

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub cars: Vec<CarOutput<'a>>,
    pub count: usize,
}

/// JSON output structure for a single car.
#[derive(Serialize)]
pub struct CarOutput<'a> {
    pub name: String,
    pub year: i32,
    pub make: &'a str,
    pub model: &'a str,
    pub color: &'a str,
    pub mileage: i64,
    pub gas_mileage: f64,
    pub price: f64,
}

/// Formats matching cars as JSON.
pub fn format_cars_json(cars: &[&Car]) -> Result<String, serde_json::Error> {
    let cars: Vec<CarOutput> = cars
        .iter()
        .map(|car| CarOutput {
            name: car.display_name(),
            year: car.year,
            make: &car.make,
            model: &car.model,
            color: &car.color,
            mileage: car.mileage,
            gas_mileage: car.gas_mileage,
            price: car.price,
        })
        .collect();

    let output = ListOutput {
        count: cars.len(),
        cars,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats matching cars as a human-readable listing.
///
/// Each entry renders a display name line followed by mileage, gas
/// mileage, and price lines. An empty match set renders the distinct
/// "No results found." notice.
pub fn format_cars_listing(cars: &[&Car], use_colors: bool) -> String {
    if cars.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut output = String::new();

    for (i, car) in cars.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        let name = car.display_name();
        if use_colors {
            output.push_str(&format!("{}\n", name.bold()));
        } else {
            output.push_str(&name);
            output.push('\n');
        }

        output.push_str(&format!("  Mileage: {}\n", car.mileage));
        output.push_str(&format!(
            "  Gas Mileage: {}\n",
            format_amount(car.gas_mileage)
        ));

        let price = format!("${}", format_amount(car.price));
        if use_colors {
            output.push_str(&format!("  Starting at {}\n", price.green()));
        } else {
            output.push_str(&format!("  Starting at {}\n", price));
        }
    }

    output
}
