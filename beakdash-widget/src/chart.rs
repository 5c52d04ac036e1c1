//! Chart widgets.
//!
//! Charts are drawn by the charting library on the client. Rendering a chart therefore only
//! prepares the rows (densifying them for grouped series) and passes the configuration through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use beakdash_dataset::{normalize, NormalizeConfig, Row};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
    Donut,
    Scatter,
    Radar,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
            ChartType::Donut => "donut",
            ChartType::Scatter => "scatter",
            ChartType::Radar => "radar",
        }
    }
}

/// Chart widget configuration.
///
/// Keys not known here are charting library options and kept verbatim in `options`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
    /// Densify the rows before charting. Only has an effect if all three fields are set.
    #[serde(default = "default_normalize")]
    pub normalize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_title: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

fn default_normalize() -> bool {
    true
}

impl ChartConfig {
    pub fn normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            x_field: self.x_field.clone(),
            y_field: self.y_field.clone(),
            color_field: self.color_field.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub chart_type: ChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
    pub rows: Vec<Row>,
}

/// Prepare a chart widget. Returns `None` if there is no data to chart.
pub fn render_chart(data: Option<&[Row]>, config: &ChartConfig) -> Option<ChartView> {
    let data = data.filter(|data| !data.is_empty())?;

    let rows = if config.normalize {
        normalize(data, &config.normalize_config()).into_owned()
    } else {
        data.to_vec()
    };

    Some(ChartView {
        chart_type: config.chart_type,
        title: config.chart_title.clone(),
        x_field: config.x_field.clone(),
        y_field: config.y_field.clone(),
        color_field: config.color_field.clone(),
        options: config.options.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_pass_through() {
        let config: ChartConfig = serde_json::from_value(json!({
            "chartType": "line",
            "xField": "day",
            "yField": "visits",
            "stacked": true,
            "legend": { "position": "bottom" },
        }))
        .unwrap();

        assert_eq!(config.chart_type, ChartType::Line);
        assert!(config.normalize);
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options["stacked"], json!(true));
        assert_eq!(config.options["legend"]["position"], json!("bottom"));
    }

    #[test]
    fn test_unknown_chart_type_is_rejected() {
        assert!(serde_json::from_value::<ChartConfig>(json!({ "chartType": "sankey" })).is_err());
    }
}
