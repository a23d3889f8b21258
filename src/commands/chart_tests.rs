use super::*;

#[test]
fn bar_chart_from_data_points() {
    let input = r#"[{"label": "UK", "value": 4}, {"label": "US", "value": 2}]"#;
    let geometry = render_chart(ChartKind::Bar, "Countries", input, &Config::default()).unwrap();
    assert!(!geometry.is_placeholder());
    assert_eq!(geometry.title, "Countries");
}

#[test]
fn grouped_chart_uses_configured_colors() {
    let mut config = Config::default();
    config
        .charts
        .colors
        .insert("Users".to_string(), "#123456".to_string());
    let input = r#"[{"label": "UK", "segments": [{"key": "Users", "value": 3}]}]"#;

    let geometry = render_chart(ChartKind::Grouped, "Top Countries", input, &config).unwrap();

    assert_eq!(geometry.legend[0].color.to_css(), "#123456");
}

#[test]
fn donut_from_slices() {
    let input = r##"[{"label": "Accepted", "value": 3, "color": "#1e8e3e"},
                     {"label": "Not Accepted", "value": 1, "color": "var(--color-failed)"}]"##;
    let geometry = render_chart(ChartKind::Donut, "Policy", input, &Config::default()).unwrap();
    assert_eq!(geometry.wedges().count(), 2);
}

#[test]
fn empty_line_input_is_a_placeholder() {
    let geometry = render_chart(ChartKind::Line, "Users", "[]", &Config::default()).unwrap();
    assert!(geometry.is_placeholder());
}

#[test]
fn wrong_shape_is_a_json_error() {
    let err = render_chart(ChartKind::Pie, "Policy", r#"{"label": "x"}"#, &Config::default()).unwrap_err();
    assert!(matches!(err, DashError::Json(_)));
}
