//! Tabular rows as they come out of a query or a static dataset, and the transforms that operate
//! on them before a widget gets to see them.
//!
//! A [`Row`] is a plain JSON object. Key order is preserved, so "first column" and "first numeric
//! field" have a well defined meaning.

use serde_json::{Map, Value};

pub mod normalize;
pub mod value;

pub use normalize::{normalize, NormalizeConfig};

/// A single record of a dataset, column name to value.
pub type Row = Map<String, Value>;

/// Collect the distinct column names of `rows` in order of first appearance.
///
/// ```
/// # use serde_json::json;
/// # use beakdash_dataset::{extract_columns, Row};
/// let rows: Vec<Row> = serde_json::from_value(json!([
///     { "name": "a", "amount": 1 },
///     { "amount": 2, "status": "active" },
/// ]))
/// .unwrap();
///
/// assert_eq!(extract_columns(&rows), ["name", "amount", "status"]);
/// ```
pub fn extract_columns(rows: &[Row]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();

    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    columns
}

/// Convert a JSON array into rows, dropping every element which is not an object.
pub fn rows_from_value(value: Value) -> Vec<Row> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(row),
                other => {
                    log::debug!("skipping non-object dataset entry {other}");
                    None
                }
            })
            .collect(),
        Value::Object(row) => vec![row],
        _ => Vec::new(),
    }
}
