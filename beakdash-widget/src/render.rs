//! Widget render selection.

use std::fmt;

use serde::Serialize;

use beakdash_dataset::{extract_columns, Row};

use crate::chart::{render_chart, ChartView};
use crate::counter::{render_counter, CounterView};
use crate::dashboard::WidgetRecord;
use crate::table::{render_table, TableView};
use crate::text::{render_text, TextView};
use crate::{WidgetConfig, WidgetKind};

/// Output of a single widget, ready to be serialized for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderedWidget {
    Text(TextView),
    Chart(ChartView),
    Table(TableView),
    Counter(CounterView),
    /// The widget has nothing to show.
    NoData {
        #[serde(rename = "widgetType")]
        widget_type: WidgetKind,
        message: String,
    },
    /// The stored widget could not be interpreted.
    Invalid { message: String },
}

impl RenderedWidget {
    pub fn no_data(widget_type: WidgetKind) -> Self {
        RenderedWidget::NoData {
            widget_type,
            message: widget_type.placeholder().to_string(),
        }
    }
}

/// Render a widget with its typed configuration and the rows fetched for it.
///
/// ```
/// # use serde_json::json;
/// # use beakdash_widget::{render, RenderedWidget, WidgetConfig};
/// let config = WidgetConfig::from_parts("counter", &json!({ "format": "currency", "decimals": 2 }))
///     .unwrap();
/// let rows = beakdash_dataset::rows_from_value(json!([{ "revenue": 1234.5 }]));
///
/// match render(&config, Some(&rows[..])) {
///     RenderedWidget::Counter(counter) => assert_eq!(counter.display, "$1,234.50"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn render(config: &WidgetConfig, data: Option<&[Row]>) -> RenderedWidget {
    let rendered = match config {
        WidgetConfig::Text(config) => render_text(config).map(RenderedWidget::Text),
        WidgetConfig::Chart(config) => render_chart(data, config).map(RenderedWidget::Chart),
        WidgetConfig::Table(config) => render_table(data, config).map(RenderedWidget::Table),
        WidgetConfig::Counter(config) => {
            render_counter(data, config).map(RenderedWidget::Counter)
        }
    };

    rendered.unwrap_or_else(|| RenderedWidget::no_data(config.kind()))
}

/// Render a stored widget.
///
/// Unknown widget types and configurations which do not fit the widget type do not abort
/// rendering, they produce [`RenderedWidget::Invalid`].
pub fn render_record(record: &WidgetRecord) -> RenderedWidget {
    match record.config() {
        Ok(config) => render(&config, record.data.as_deref()),
        Err(err) => {
            log::warn!("widget {}: {err}", record.id);
            RenderedWidget::Invalid {
                message: err.to_string(),
            }
        }
    }
}

impl fmt::Display for RenderedWidget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderedWidget::Text(text) => writeln!(f, "{}", text.content),
            RenderedWidget::Chart(chart) => {
                if let Some(title) = &chart.title {
                    writeln!(f, "{title}")?;
                }
                writeln!(f, "{} chart, {} rows", chart.chart_type.as_str(), chart.rows.len())?;

                let columns = extract_columns(&chart.rows);
                write!(f, "{}", TableView::new(columns, &chart.rows))
            }
            RenderedWidget::Table(table) => write!(f, "{table}"),
            RenderedWidget::Counter(counter) => {
                if let Some(title) = &counter.title {
                    writeln!(f, "{title}")?;
                }
                writeln!(f, "{}", counter.display)
            }
            RenderedWidget::NoData { message, .. } => writeln!(f, "{message}"),
            RenderedWidget::Invalid { message } => writeln!(f, "invalid widget: {message}"),
        }
    }
}
