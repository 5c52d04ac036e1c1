//! Table widgets.
//!
//! The displayed rows are derived from the raw data in a fixed order: first the row limit is
//! applied to the original data, then the limited rows are sorted, then filtered. This is not the
//! same as filtering first, and dashboards rely on it.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use beakdash_dataset::value::{as_number, compare_values, loose_eq, value_to_string};
use beakdash_dataset::{extract_columns, Row};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
}

/// A single filter condition on a table column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFilter {
    /// Column to check. Filters without a field are ignored.
    #[serde(default)]
    pub field: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: Value,
}

impl TableFilter {
    pub fn new<F: Into<String>>(field: F, operator: FilterOperator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Check if `row` satisfies this filter.
    pub fn matches(&self, row: &Row) -> bool {
        if self.field.is_empty() {
            return true;
        }

        let cell = row.get(&self.field).unwrap_or(&Value::Null);

        match self.operator {
            FilterOperator::Equals => loose_eq(cell, &self.value),
            FilterOperator::NotEquals => !loose_eq(cell, &self.value),
            FilterOperator::GreaterThan => {
                filter_ordering(cell, &self.value) == Some(Ordering::Greater)
            }
            FilterOperator::LessThan => filter_ordering(cell, &self.value) == Some(Ordering::Less),
            FilterOperator::Contains => value_to_string(cell)
                .to_lowercase()
                .contains(&value_to_string(&self.value).to_lowercase()),
        }
    }
}

/// Ordering used by `greater_than` and `less_than`.
///
/// Numbers and numeric strings compare numerically, two other strings compare lexically (so ISO
/// dates work). Any other combination is unordered and never matches.
fn filter_ordering(cell: &Value, value: &Value) -> Option<Ordering> {
    match (as_number(cell), as_number(value)) {
        (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs),
        _ => match (cell, value) {
            (Value::String(lhs), Value::String(rhs)) => Some(lhs.as_str().cmp(rhs.as_str())),
            _ => None,
        },
    }
}

/// Table widget configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableConfig {
    /// Columns to show. Derived from the data if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    /// Number of rows taken from the original data. `0` means no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Conditions a row must all satisfy to be shown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<TableFilter>,
}

impl TableConfig {
    fn sort_field(&self) -> Option<&str> {
        self.sort_by.as_deref().filter(|field| !field.is_empty())
    }
}

fn cell<'a>(row: &'a Row, field: &str) -> &'a Value {
    row.get(field).unwrap_or(&Value::Null)
}

/// Apply limit, sort and filters of `config` to `data`, in that order.
pub fn transform_rows(data: &[Row], config: &TableConfig) -> Vec<Row> {
    let mut rows: Vec<Row> = match config.limit {
        Some(limit) if limit > 0 => data.iter().take(limit).cloned().collect(),
        _ => data.to_vec(),
    };

    if let Some(field) = config.sort_field() {
        match config.sort_order {
            SortOrder::Asc => rows.sort_by(|a, b| compare_values(cell(a, field), cell(b, field))),
            SortOrder::Desc => rows.sort_by(|a, b| compare_values(cell(b, field), cell(a, field))),
            SortOrder::None => (),
        }
    }

    rows.retain(|row| config.filters.iter().all(|filter| filter.matches(row)));

    rows
}

/// The rendered table, every cell already converted to text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Render a table widget. Returns `None` if there is no data to show.
pub fn render_table(data: Option<&[Row]>, config: &TableConfig) -> Option<TableView> {
    let data = data.filter(|data| !data.is_empty())?;

    let columns = match &config.headers {
        Some(headers) => headers.clone(),
        None => extract_columns(data),
    };

    Some(TableView::new(columns, &transform_rows(data, config)))
}

impl TableView {
    /// Build the view of `rows` restricted to `columns`. Missing cells are empty.
    pub fn new(columns: Vec<String>, rows: &[Row]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| row.get(column).map(value_to_string).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    fn optimal_column_widths(&self) -> HashMap<&str, usize> {
        let mut widths = HashMap::new();

        for (i, column) in self.columns.iter().enumerate() {
            let mut min_width = column.chars().count();

            for row in &self.rows {
                let text = row.get(i).map(String::as_str).unwrap_or_default();
                min_width = std::cmp::max(text.chars().count(), min_width);
            }

            widths.insert(column.as_str(), min_width + 2);
        }

        widths
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths = self.optimal_column_widths();

        for column in &self.columns {
            let width = *widths.get(column.as_str()).unwrap_or(&0);
            write!(f, "{column:width$}")?;
        }
        writeln!(f)?;

        for row in &self.rows {
            for (column, text) in self.columns.iter().zip(row) {
                let width = *widths.get(column.as_str()).unwrap_or(&0);
                write!(f, "{text:width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
