use serde_json::{json, Value};

use beakdash_dataset::rows_from_value;
use beakdash_widget::counter::{
    render_counter, CounterConfig, CounterFormat, CounterIcon, CounterView, Indicator, Polarity,
};

fn counter(data: Value, config: Value) -> Option<CounterView> {
    let rows = rows_from_value(data);
    let config: CounterConfig = serde_json::from_value(config).unwrap();
    render_counter(Some(&rows[..]), &config)
}

#[test]
fn test_currency() {
    let view = counter(
        json!([{ "revenue": 1234.5 }]),
        json!({ "format": "currency", "decimals": 2, "prefix": "ignored ", "suffix": " ignored" }),
    )
    .unwrap();

    assert_eq!(view.display, "$1,234.50");
    assert_eq!(view.value, 1234.5);
}

#[test]
fn test_percentage() {
    let view = counter(
        json!([{ "rate": 42.567 }]),
        json!({ "format": "percentage", "decimals": 1, "suffix": " pts" }),
    )
    .unwrap();
    assert_eq!(view.display, "42.6%");

    let view = counter(
        json!([{ "rate": 42.567 }]),
        json!({ "format": "percentage", "decimals": 1, "prefix": "+" }),
    )
    .unwrap();
    assert_eq!(view.display, "+42.6%");
}

#[test]
fn test_number_with_prefix_and_suffix() {
    let view = counter(
        json!([{ "users": 1234567 }]),
        json!({ "prefix": "~", "suffix": " users" }),
    )
    .unwrap();

    assert_eq!(view.display, "~1,234,567 users");
}

#[test]
fn test_auto_selects_first_numeric_field() {
    let view = counter(
        json!([{ "label": "total", "count": "12", "value": 7, "other": 9 }]),
        json!({}),
    )
    .unwrap();

    assert_eq!(view.value, 7.0);
    assert_eq!(view.display, "7");
}

#[test]
fn test_no_numeric_field() {
    let view = counter(json!([{ "label": "total" }]), json!({})).unwrap();
    assert_eq!(view.value, 0.0);
    assert_eq!(view.display, "0");
    assert_eq!(view.polarity, Some(Polarity::Neutral));

    let view = counter(json!([{ "total": "n/a" }]), json!({ "valueField": "total" })).unwrap();
    assert_eq!(view.value, 0.0);
    assert_eq!(view.display, "n/a");
}

#[test]
fn test_value_field_accepts_numeric_strings() {
    let view = counter(
        json!([{ "total": "1500.25" }]),
        json!({ "valueField": "total", "decimals": 2 }),
    )
    .unwrap();

    assert_eq!(view.display, "1,500.25");
}

#[test]
fn test_polarity_and_icons() {
    let positive = counter(json!([{ "delta": 3 }]), json!({})).unwrap();
    assert_eq!(positive.polarity, Some(Polarity::Positive));
    assert_eq!(positive.icon, Some(Indicator::TrendingUp));

    let negative = counter(json!([{ "delta": -3 }]), json!({})).unwrap();
    assert_eq!(negative.polarity, Some(Polarity::Negative));
    assert_eq!(negative.icon, Some(Indicator::TrendingDown));
    assert_eq!(negative.display, "-3");

    let zero = counter(json!([{ "delta": 0 }]), json!({})).unwrap();
    assert_eq!(zero.icon, Some(Indicator::Neutral));

    let uncolored = counter(json!([{ "delta": -3 }]), json!({ "colorCode": false })).unwrap();
    assert_eq!(uncolored.polarity, None);
    assert_eq!(uncolored.icon, Some(Indicator::TrendingDown));

    let dollar = counter(json!([{ "delta": -3 }]), json!({ "icon": "dollar" })).unwrap();
    assert_eq!(dollar.icon, Some(Indicator::Dollar));
    assert_eq!(dollar.polarity, Some(Polarity::Negative));

    let hidden = counter(
        json!([{ "delta": 3 }]),
        json!({ "icon": "percent", "showIcon": false }),
    )
    .unwrap();
    assert_eq!(hidden.icon, None);
}

#[test]
fn test_empty_counter_data() {
    let config = CounterConfig {
        format: CounterFormat::Currency,
        icon: Some(CounterIcon::Dollar),
        ..Default::default()
    };

    assert!(render_counter(None, &config).is_none());
    assert!(render_counter(Some(&[]), &config).is_none());
}

#[test]
fn test_title() {
    let view = counter(json!([{ "v": 1 }]), json!({ "chartTitle": "Signups" })).unwrap();
    assert_eq!(view.title.as_deref(), Some("Signups"));
}
