use serde_json::json;

use beakdash_widget::chart::ChartType;
use beakdash_widget::{Dashboard, RenderedWidget, WidgetKind, WidgetRecord, NO_DATA_MESSAGE};

fn sales_dashboard() -> Dashboard {
    Dashboard::from_value(json!({
        "id": 7,
        "name": "Sales",
        "spaceId": 3,
        "widgets": [
            {
                "id": 10,
                "title": "Revenue",
                "type": "counter",
                "config": { "valueField": "revenue", "format": "currency", "decimals": 2 },
                "data": [{ "revenue": 1234.5 }],
                "position": { "x": 6, "y": 0, "w": 3, "h": 2 },
            },
            {
                "id": 11,
                "title": "By region",
                "type": "chart",
                "config": {
                    "chartType": "bar",
                    "xField": "month",
                    "yField": "sales",
                    "colorField": "region",
                    "stacked": true,
                },
                "data": [
                    { "month": "jan", "region": "north", "sales": 10 },
                    { "month": "feb", "region": "south", "sales": 20 },
                ],
                "position": { "x": 0, "y": 2, "w": 12, "h": 4 },
            },
            {
                "id": 12,
                "title": "Notes",
                "type": "text",
                "config": { "content": "Updated daily", "format": "markdown" },
                "position": { "x": 0, "y": 0, "w": 6, "h": 2 },
            },
            {
                "id": 13,
                "type": "table",
                "config": { "sortBy": "amount" },
                "data": [],
            },
            {
                "id": 14,
                "type": "gauge",
                "config": {},
            },
            {
                "id": 15,
                "type": "counter",
                "config": { "decimals": "two" },
                "data": [{ "v": 1 }],
            },
        ],
    }))
    .unwrap()
}

#[test]
fn test_render_dashboard() {
    let rendered = sales_dashboard().render();

    assert_eq!(rendered.id, 7);
    assert_eq!(rendered.name, "Sales");

    let ids: Vec<u64> = rendered.widgets.iter().map(|w| w.id).collect();
    assert_eq!(ids, [12, 10, 11, 13, 14, 15]);

    match &rendered.widgets[0].widget {
        RenderedWidget::Text(text) => assert_eq!(text.content, "Updated daily"),
        other => panic!("unexpected {other:?}"),
    }

    match &rendered.widgets[1].widget {
        RenderedWidget::Counter(counter) => assert_eq!(counter.display, "$1,234.50"),
        other => panic!("unexpected {other:?}"),
    }

    match &rendered.widgets[2].widget {
        RenderedWidget::Chart(chart) => {
            assert_eq!(chart.chart_type, ChartType::Bar);
            // 2 months x 2 regions
            assert_eq!(chart.rows.len(), 4);
            assert_eq!(chart.options["stacked"], json!(true));
        }
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(
        rendered.widgets[3].widget,
        RenderedWidget::NoData {
            widget_type: WidgetKind::Table,
            message: NO_DATA_MESSAGE.to_string(),
        }
    );

    match &rendered.widgets[4].widget {
        RenderedWidget::Invalid { message } => assert_eq!(message, "unknown widget type 'gauge'"),
        other => panic!("unexpected {other:?}"),
    }

    match &rendered.widgets[5].widget {
        RenderedWidget::Invalid { message } => {
            assert!(message.starts_with("invalid counter widget configuration"))
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_chart_without_normalization() {
    let record: WidgetRecord = serde_json::from_value(json!({
        "id": 1,
        "type": "chart",
        "config": {
            "chartType": "line",
            "xField": "month",
            "yField": "sales",
            "colorField": "region",
            "normalize": false,
        },
        "data": [
            { "month": "jan", "region": "north", "sales": 10 },
            { "month": "feb", "region": "south", "sales": 20 },
        ],
    }))
    .unwrap();

    match record.render() {
        RenderedWidget::Chart(chart) => assert_eq!(chart.rows, record.data.unwrap()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_empty_data_placeholders() {
    for (widget_type, config) in [
        ("chart", json!({ "xField": "x" })),
        ("table", json!({})),
        ("counter", json!({})),
        ("text", json!({ "content": "   " })),
    ] {
        for data in [None, Some(json!([]))] {
            let mut record = json!({ "id": 1, "type": widget_type, "config": config.clone() });
            if let Some(data) = &data {
                record["data"] = data.clone();
            }

            let record: WidgetRecord = serde_json::from_value(record).unwrap();
            match record.render() {
                RenderedWidget::NoData { widget_type, .. } => {
                    assert_eq!(widget_type.as_str(), record.widget_type)
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}

#[test]
fn test_dashboard_output_shape() {
    let rendered = sales_dashboard().render();
    let value = serde_json::to_value(&rendered).unwrap();

    assert_eq!(value["widgets"][0]["title"], json!("Notes"));
    assert_eq!(value["widgets"][0]["widget"]["kind"], json!("text"));
    assert_eq!(value["widgets"][0]["widget"]["format"], json!("markdown"));
    assert_eq!(value["widgets"][1]["widget"]["polarity"], json!("positive"));
    assert_eq!(value["widgets"][1]["widget"]["icon"], json!("trending-up"));
    assert_eq!(value["widgets"][3]["widget"]["kind"], json!("no-data"));
}
