//! Stored dashboards and widgets.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use beakdash_dataset::{rows_from_value, Row};

use crate::render::{render_record, RenderedWidget};
use crate::{Error, WidgetConfig};

/// Grid position of a widget on its dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A widget as stored with its dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The widget type tag, `text`, `chart`, `table` or `counter`.
    #[serde(rename = "type")]
    pub widget_type: String,
    /// Type specific configuration, see [`WidgetConfig`].
    #[serde(default)]
    pub config: Value,
    /// Cached rows of the widget's dataset. Entries which are not objects are dropped.
    #[serde(
        default,
        deserialize_with = "deserialize_rows",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Vec<Row>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

fn deserialize_rows<'de, D>(deserializer: D) -> Result<Option<Vec<Row>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(rows_from_value))
}

impl WidgetRecord {
    /// Parse the stored type tag and configuration.
    pub fn config(&self) -> Result<WidgetConfig, Error> {
        WidgetConfig::from_parts(&self.widget_type, &self.config)
    }

    pub fn render(&self) -> RenderedWidget {
        render_record(self)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The space this dashboard belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<u64>,
    #[serde(default)]
    pub widgets: Vec<WidgetRecord>,
}

/// A rendered widget together with its placement.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDashboardWidget {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub widget: RenderedWidget,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDashboard {
    pub id: u64,
    pub name: String,
    pub widgets: Vec<RenderedDashboardWidget>,
}

impl Dashboard {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(Error::Dashboard)
    }

    pub fn from_value(value: Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(Error::Dashboard)
    }

    /// Widgets in layout order: top to bottom, then left to right. Widgets without a position
    /// follow in stored order.
    pub fn ordered_widgets(&self) -> Vec<&WidgetRecord> {
        let mut widgets: Vec<&WidgetRecord> = self.widgets.iter().collect();
        widgets.sort_by_key(|widget| match widget.position {
            Some(pos) => (false, pos.y, pos.x),
            None => (true, 0, 0),
        });
        widgets
    }

    pub fn render(&self) -> RenderedDashboard {
        let widgets = self
            .ordered_widgets()
            .into_iter()
            .map(|record| RenderedDashboardWidget {
                id: record.id,
                title: record.title.clone(),
                position: record.position,
                widget: record.render(),
            })
            .collect::<Vec<_>>();

        log::debug!("rendered {} widgets of dashboard '{}'", widgets.len(), self.name);

        RenderedDashboard {
            id: self.id,
            name: self.name.clone(),
            widgets,
        }
    }
}
