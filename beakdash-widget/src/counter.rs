//! Counter widgets: a single aggregate value with semantic formatting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use beakdash_dataset::value::{as_number, value_to_string};
use beakdash_dataset::Row;

use crate::format::{format_currency, format_grouped, format_percentage};

/// How the counter value is printed. Unknown formats print as plain numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterFormat {
    Currency,
    Percentage,
    #[default]
    #[serde(other)]
    Number,
}

/// Explicitly configured icon. Anything but `dollar` and `percent` selects the trend icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterIcon {
    Dollar,
    Percent,
    #[serde(other)]
    Trend,
}

/// Counter widget configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CounterConfig {
    /// Column holding the value. The first numeric column is used if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
    #[serde(default)]
    pub format: CounterFormat,
    /// Printed in front of the value, ignored for currency.
    #[serde(default)]
    pub prefix: String,
    /// Printed after the value, ignored for currency and percentage.
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default = "default_true")]
    pub show_icon: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<CounterIcon>,
    /// Color the value by its sign.
    #[serde(default = "default_true")]
    pub color_code: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_title: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            value_field: None,
            format: CounterFormat::default(),
            prefix: String::new(),
            suffix: String::new(),
            decimals: 0,
            show_icon: true,
            icon: None,
            color_code: true,
            chart_title: None,
        }
    }
}

/// Sign of the counter value, used for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Polarity::Positive
        } else if value < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Css class the dashboard applies to the value.
    pub fn color_class(&self) -> &'static str {
        match self {
            Polarity::Positive => "text-green-500",
            Polarity::Negative => "text-red-500",
            Polarity::Neutral => "text-gray-500",
        }
    }
}

/// Icon shown next to the counter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    TrendingUp,
    TrendingDown,
    Neutral,
    Dollar,
    Percent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The numeric value, `0` if the data did not contain one.
    pub value: f64,
    /// The formatted value as shown to the user.
    pub display: String,
    /// Value polarity, `None` if color coding is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Indicator>,
}

enum Selected {
    Number(f64),
    Raw(String),
    Missing,
}

fn select_value(row: &Row, value_field: Option<&str>) -> Selected {
    match value_field {
        Some(field) => match row.get(field) {
            None | Some(Value::Null) => Selected::Missing,
            Some(value) => match as_number(value) {
                Some(number) => Selected::Number(number),
                None => Selected::Raw(value_to_string(value)),
            },
        },
        None => row
            .values()
            .find_map(|value| match value {
                Value::Number(n) => n.as_f64(),
                _ => None,
            })
            .map(Selected::Number)
            .unwrap_or(Selected::Missing),
    }
}

/// Format `value` according to `config`.
pub fn format_value(value: f64, config: &CounterConfig) -> String {
    match config.format {
        CounterFormat::Currency => format_currency(value, config.decimals),
        CounterFormat::Percentage => {
            format!("{}{}", config.prefix, format_percentage(value, config.decimals))
        }
        CounterFormat::Number => format!(
            "{}{}{}",
            config.prefix,
            format_grouped(value, config.decimals),
            config.suffix
        ),
    }
}

/// Render a counter widget from the first row of `data`. Returns `None` if there is no data.
pub fn render_counter(data: Option<&[Row]>, config: &CounterConfig) -> Option<CounterView> {
    let first = data?.first()?;

    let value_field = config.value_field.as_deref().filter(|f| !f.is_empty());

    let (value, display) = match select_value(first, value_field) {
        Selected::Number(value) => (value, format_value(value, config)),
        Selected::Raw(raw) => {
            log::debug!("counter value {raw:?} is not numeric, showing it verbatim");
            (0.0, raw)
        }
        Selected::Missing => (0.0, "0".to_string()),
    };

    let polarity = Polarity::of(value);

    let icon = match (config.show_icon, config.icon) {
        (false, _) => None,
        (true, Some(CounterIcon::Dollar)) => Some(Indicator::Dollar),
        (true, Some(CounterIcon::Percent)) => Some(Indicator::Percent),
        (true, Some(CounterIcon::Trend) | None) => Some(match polarity {
            Polarity::Positive => Indicator::TrendingUp,
            Polarity::Negative => Indicator::TrendingDown,
            Polarity::Neutral => Indicator::Neutral,
        }),
    };

    Some(CounterView {
        title: config.chart_title.clone(),
        value,
        display,
        polarity: config.color_code.then_some(polarity),
        icon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_deserialization() {
        let parse = |v: Value| serde_json::from_value::<CounterFormat>(v).unwrap();

        assert_eq!(parse(json!("currency")), CounterFormat::Currency);
        assert_eq!(parse(json!("percentage")), CounterFormat::Percentage);
        assert_eq!(parse(json!("number")), CounterFormat::Number);
        assert_eq!(parse(json!("compact")), CounterFormat::Number);
    }

    #[test]
    fn test_config_defaults() {
        let config: CounterConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, CounterConfig::default());
        assert!(config.show_icon);
        assert!(config.color_code);
        assert_eq!(config.decimals, 0);
    }

    #[test]
    fn test_format_value() {
        let mut config = CounterConfig {
            prefix: "~".into(),
            suffix: " units".into(),
            decimals: 1,
            ..Default::default()
        };
        assert_eq!(format_value(12345.67, &config), "~12,345.7 units");

        config.format = CounterFormat::Percentage;
        assert_eq!(format_value(12.34, &config), "~12.3%");

        config.format = CounterFormat::Currency;
        assert_eq!(format_value(12.34, &config), "$12.3");
    }
}
