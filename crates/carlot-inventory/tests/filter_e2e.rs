//! End-to-end library tests: load a dataset, parse raw filter input,
//! apply criteria, and check the resulting entries.

use std::fs;

use tempfile::TempDir;

use carlot_inventory_rs::filter::{parse_bound, FilterCriteria};
use carlot_inventory_rs::{Car, Inventory, InventoryStore};

const SINGLE_CAR_DATASET: &str = r#"[
    {"year": 2015, "make": "Ford", "model": "Focus", "color": "Red",
     "mileage": 30000, "gasMileage": 32, "price": 9000}
]"#;

fn write_dataset(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("cars.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_min_year_above_only_record_yields_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SINGLE_CAR_DATASET);
    let inventory = InventoryStore::with_path(path).load().unwrap();

    let criteria = FilterCriteria {
        min_year: parse_bound("2016"),
        ..FilterCriteria::default()
    };
    let results = criteria.apply(inventory.cars());
    assert!(results.is_empty());
}

#[test]
fn test_make_filter_yields_single_entry_with_display_name() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SINGLE_CAR_DATASET);
    let inventory = InventoryStore::with_path(path).load().unwrap();

    let criteria = FilterCriteria {
        make: Some("Ford".to_string()),
        ..FilterCriteria::default()
    };
    let results = criteria.apply(inventory.cars());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_name(), "2015 Ford Focus (Red)");
}

#[test]
fn test_raw_input_flows_through_parser_into_criteria() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SINGLE_CAR_DATASET);
    let inventory = InventoryStore::with_path(path).load().unwrap();

    // Messy free-text input: only the first digit run counts, blanks
    // impose no bound.
    let criteria = FilterCriteria {
        min_year: parse_bound(" around 2010 or so "),
        max_year: parse_bound(""),
        min_mileage: parse_bound("no minimum"),
        max_mileage: parse_bound("50000 miles"),
        ..FilterCriteria::default()
    };
    assert_eq!(criteria.min_year, Some(2010));
    assert_eq!(criteria.max_year, None);
    assert_eq!(criteria.min_mileage, None);
    assert_eq!(criteria.max_mileage, Some(50000));

    let results = criteria.apply(inventory.cars());
    assert_eq!(results.len(), 1);
}

#[test]
fn test_all_absent_criteria_returns_dataset_unchanged() {
    let cars = vec![
        Car {
            year: 2018,
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            color: "Blue".to_string(),
            mileage: 12000,
            gas_mileage: 36.0,
            price: 15000.0,
        },
        Car {
            year: 2012,
            make: "Ford".to_string(),
            model: "Fusion".to_string(),
            color: "Black".to_string(),
            mileage: 80000,
            gas_mileage: 28.5,
            price: 5500.0,
        },
    ];
    let inventory = Inventory::new(cars.clone());

    let results = FilterCriteria::default().apply(inventory.cars());
    assert_eq!(results.len(), cars.len());
    // Order and content preserved.
    assert_eq!(results[0], &cars[0]);
    assert_eq!(results[1], &cars[1]);
}

#[test]
fn test_distinct_values_drive_exact_match_filters() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"[
            {"year": 2015, "make": "Ford", "model": "Focus", "color": "Red",
             "mileage": 30000, "gasMileage": 32, "price": 9000},
            {"year": 2018, "make": "Honda", "model": "Civic", "color": "Blue",
             "mileage": 12000, "gasMileage": 36, "price": 15000},
            {"year": 2012, "make": "Ford", "model": "Fusion", "color": "Black",
             "mileage": 80000, "gasMileage": 28.5, "price": 5500}
        ]"#,
    );
    let inventory = InventoryStore::with_path(path).load().unwrap();

    assert_eq!(inventory.distinct_makes(), vec!["Ford", "Honda"]);
    assert_eq!(inventory.distinct_colors(), vec!["Black", "Blue", "Red"]);

    // Every extracted value, used as an exact-match filter, selects at
    // least one record.
    for make in inventory.distinct_makes() {
        let criteria = FilterCriteria {
            make: Some(make),
            ..FilterCriteria::default()
        };
        assert!(!criteria.apply(inventory.cars()).is_empty());
    }
}
