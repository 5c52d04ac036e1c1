//! Densify sparse category/series datasets.
//!
//! Grouped and stacked charts need a value for every combination of category (x) and series
//! (color). [`normalize`] builds that grid and fills the gaps with `0`.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::value_key;
use crate::Row;

/// Field mapping used by [`normalize`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeConfig {
    /// Category column, plotted along the x axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_field: Option<String>,
    /// Value column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_field: Option<String>,
    /// Series column, one color per distinct value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
}

impl NormalizeConfig {
    pub fn new<X, Y, C>(x_field: X, y_field: Y, color_field: C) -> Self
    where
        X: Into<String>,
        Y: Into<String>,
        C: Into<String>,
    {
        Self {
            x_field: Some(x_field.into()),
            y_field: Some(y_field.into()),
            color_field: Some(color_field.into()),
        }
    }

    /// The three field names, if all of them are set and non-empty.
    pub fn fields(&self) -> Option<(&str, &str, &str)> {
        fn non_empty(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|f| !f.is_empty())
        }

        Some((
            non_empty(&self.x_field)?,
            non_empty(&self.y_field)?,
            non_empty(&self.color_field)?,
        ))
    }
}

/// Distinct values of `field` in order of first appearance, paired with their keys.
fn distinct_values<'a>(data: &'a [Row], field: &str) -> Vec<(String, &'a Value)> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for row in data {
        let value = row.get(field).unwrap_or(&Value::Null);
        let key = value_key(value);
        if seen.insert(key.clone()) {
            values.push((key, value));
        }
    }

    values
}

/// Expand `data` into the full cross product of its distinct `xField` and `colorField` values.
///
/// Every output row holds exactly the three configured fields. `yField` is taken from the first
/// input row with the same x and color value, or is `0` if there is none.
///
/// If `data` is empty or the config does not name all three fields, `data` is returned as is.
///
/// ```
/// # use serde_json::json;
/// # use beakdash_dataset::{normalize, NormalizeConfig, Row};
/// let data: Vec<Row> = serde_json::from_value(json!([
///     { "month": "jan", "sales": 10, "region": "north" },
///     { "month": "feb", "sales": 20, "region": "south" },
/// ]))
/// .unwrap();
///
/// let dense = normalize(&data, &NormalizeConfig::new("month", "sales", "region"));
/// assert_eq!(dense.len(), 4);
/// ```
pub fn normalize<'a>(data: &'a [Row], config: &NormalizeConfig) -> Cow<'a, [Row]> {
    let (x_field, y_field, color_field) = match config.fields() {
        Some(fields) if !data.is_empty() => fields,
        _ => return Cow::Borrowed(data),
    };

    let xs = distinct_values(data, x_field);
    let colors = distinct_values(data, color_field);

    let mut index: HashMap<(String, String), &Row> = HashMap::with_capacity(data.len());
    for row in data {
        let x = value_key(row.get(x_field).unwrap_or(&Value::Null));
        let color = value_key(row.get(color_field).unwrap_or(&Value::Null));
        index.entry((x, color)).or_insert(row);
    }

    let mut dense = Vec::with_capacity(xs.len() * colors.len());
    for (x_key, x) in &xs {
        for (color_key, color) in &colors {
            let y = match index.get(&(x_key.clone(), color_key.clone())) {
                Some(row) => row.get(y_field).cloned().unwrap_or(Value::Null),
                None => Value::from(0),
            };

            let mut out = Row::new();
            out.insert(x_field.to_string(), (*x).clone());
            out.insert(color_field.to_string(), (*color).clone());
            out.insert(y_field.to_string(), y);
            dense.push(out);
        }
    }

    log::debug!(
        "normalized {} rows into {}x{} grid",
        data.len(),
        xs.len(),
        colors.len()
    );

    Cow::Owned(dense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_require_all_three() {
        assert_eq!(
            NormalizeConfig::new("x", "y", "c").fields(),
            Some(("x", "y", "c"))
        );
        assert_eq!(NormalizeConfig::new("x", "", "c").fields(), None);
        assert_eq!(NormalizeConfig::default().fields(), None);

        let config: NormalizeConfig =
            serde_json::from_value(json!({ "xField": "x", "yField": "y" })).unwrap();
        assert_eq!(config.fields(), None);
    }

    #[test]
    fn test_first_match_wins() {
        let data = crate::rows_from_value(json!([
            { "x": "a", "c": "red", "y": 1 },
            { "x": "a", "c": "red", "y": 2 },
        ]));

        let dense = normalize(&data, &NormalizeConfig::new("x", "y", "c"));
        assert_eq!(dense.len(), 1);
        assert_eq!(dense[0]["y"], json!(1));
    }

    #[test]
    fn test_missing_y_in_matched_row() {
        let data = crate::rows_from_value(json!([
            { "x": "a", "c": "red" },
            { "x": "b", "c": "red", "y": 3 },
        ]));

        let dense = normalize(&data, &NormalizeConfig::new("x", "y", "c"));
        assert_eq!(dense.len(), 2);
        assert_eq!(dense[0]["y"], Value::Null);
        assert_eq!(dense[1]["y"], json!(3));
    }
}
