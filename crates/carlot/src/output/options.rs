//! Distinct-value (choice list) output formatting.

use serde::Serialize;

/// JSON output structure for a distinct-value list.
#[derive(Serialize)]
pub struct OptionsOutput<'a> {
    pub field: &'a str,
    pub values: &'a [String],
    pub count: usize,
}

/// Formats a distinct-value list as JSON.
pub fn format_options_json(field: &str, values: &[String]) -> Result<String, serde_json::Error> {
    let output = OptionsOutput {
        field,
        values,
        count: values.len(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a distinct-value list as plain lines, one value per line.
pub fn format_options_list(values: &[String], empty_message: &str) -> String {
    if values.is_empty() {
        return format!("{empty_message}\n");
    }

    let mut output = String::new();
    for value in values {
        output.push_str(value);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_one_value_per_line() {
        let values = vec!["Ford".to_string(), "Honda".to_string()];
        assert_eq!(format_options_list(&values, "No makes found."), "Ford\nHonda\n");
    }

    #[test]
    fn test_list_empty_message() {
        assert_eq!(format_options_list(&[], "No makes found."), "No makes found.\n");
    }

    #[test]
    fn test_json_shape() {
        let values = vec!["Black".to_string(), "Red".to_string()];
        let json = format_options_json("colors", &values).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["field"], "colors");
        assert_eq!(value["count"], 2);
        assert_eq!(value["values"][0], "Black");
    }
}
