//! The per-type widget configuration union.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chart::ChartConfig;
use crate::counter::CounterConfig;
use crate::table::TableConfig;
use crate::text::TextConfig;
use crate::Error;

/// The type tag stored with every widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Text,
    Chart,
    Table,
    Counter,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Chart => "chart",
            WidgetKind::Table => "table",
            WidgetKind::Counter => "counter",
        }
    }

    /// Placeholder rendered when the widget has nothing to show.
    pub fn placeholder(&self) -> &'static str {
        match self {
            WidgetKind::Text => crate::NO_CONTENT_MESSAGE,
            WidgetKind::Chart | WidgetKind::Table | WidgetKind::Counter => crate::NO_DATA_MESSAGE,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "text" => WidgetKind::Text,
            "chart" => WidgetKind::Chart,
            "table" => WidgetKind::Table,
            "counter" => WidgetKind::Counter,
            other => return Err(Error::UnknownWidgetType(other.to_string())),
        })
    }
}

/// Widget configuration, one strictly typed variant per widget type.
///
/// Serialized adjacently tagged, which matches the persisted `{"type": ..., "config": ...}`
/// layout of a widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum WidgetConfig {
    Text(TextConfig),
    Chart(ChartConfig),
    Table(TableConfig),
    Counter(CounterConfig),
}

impl WidgetConfig {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetConfig::Text(_) => WidgetKind::Text,
            WidgetConfig::Chart(_) => WidgetKind::Chart,
            WidgetConfig::Table(_) => WidgetKind::Table,
            WidgetConfig::Counter(_) => WidgetKind::Counter,
        }
    }

    /// Build the typed configuration from a stored type tag and configuration blob.
    ///
    /// A `null` blob is treated like an empty object, so every setting takes its default.
    pub fn from_parts(widget_type: &str, config: &Value) -> Result<Self, Error> {
        let kind: WidgetKind = widget_type.parse()?;

        let config = match config {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };

        let invalid = |source| Error::InvalidConfig { kind, source };

        Ok(match kind {
            WidgetKind::Text => {
                WidgetConfig::Text(serde_json::from_value(config).map_err(invalid)?)
            }
            WidgetKind::Chart => {
                WidgetConfig::Chart(serde_json::from_value(config).map_err(invalid)?)
            }
            WidgetKind::Table => {
                WidgetConfig::Table(serde_json::from_value(config).map_err(invalid)?)
            }
            WidgetKind::Counter => {
                WidgetConfig::Counter(serde_json::from_value(config).map_err(invalid)?)
            }
        })
    }
}
