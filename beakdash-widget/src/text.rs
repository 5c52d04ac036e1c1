//! Text widgets, static content independent of any dataset.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Plain,
    Markdown,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextConfig {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub format: TextFormat,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextView {
    pub content: String,
    pub format: TextFormat,
}

/// Returns `None` for blank content.
pub fn render_text(config: &TextConfig) -> Option<TextView> {
    if config.content.trim().is_empty() {
        return None;
    }

    Some(TextView {
        content: config.content.clone(),
        format: config.format,
    })
}
