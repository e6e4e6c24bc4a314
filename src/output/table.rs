//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::client::models::Facility;

/// Placeholder for absent optional values
pub const NOT_SET: &str = "Not set";

/// Format rows as a rounded table with centered headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Comma-separated facility names for a table cell
pub fn facility_names(facilities: &[Facility]) -> String {
    if facilities.is_empty() {
        return "No Facility".to_string();
    }
    facilities
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cell text for an optional value
pub fn or_not_set(value: Option<&str>) -> String {
    value.unwrap_or(NOT_SET).to_string()
}
