//! Widget rendering for BeakDash dashboards.
//!
//! A persisted widget consists of a type tag, a configuration blob and optionally cached data.
//! [`WidgetConfig`] turns the tag and blob into a strictly typed configuration, and
//! [`render()`] dispatches it to the matching presentation transform:
//!
//! * [`table`]: limit, sort and filter rows, then print cells.
//! * [`counter`]: pick a single value and format it as number, currency or percentage.
//! * [`chart`]: optionally densify rows and hand them to the chart layer.
//! * [`text`]: static content.
//!
//! None of the transforms fail. Missing data renders a placeholder, unusable configuration is
//! reported through [`RenderedWidget::Invalid`].

use thiserror::Error;

pub mod chart;
pub mod config;
pub mod counter;
pub mod dashboard;
pub mod format;
pub mod render;
pub mod table;
pub mod text;

pub use config::{WidgetConfig, WidgetKind};
pub use dashboard::{Dashboard, Position, WidgetRecord};
pub use render::{render, render_record, RenderedWidget};

pub use beakdash_dataset::Row;

/// Placeholder shown by data driven widgets without any rows.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Placeholder shown by text widgets without content.
pub const NO_CONTENT_MESSAGE: &str = "No content";

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown widget type '{0}'")]
    UnknownWidgetType(String),
    #[error("invalid {kind} widget configuration: {source}")]
    InvalidConfig {
        kind: WidgetKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not parse dashboard: {0}")]
    Dashboard(#[source] serde_json::Error),
}
