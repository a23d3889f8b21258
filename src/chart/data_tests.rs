//! Tests for the chart input model.

use super::*;

#[test]
fn data_point_with_color() {
    let point = DataPoint::new("Rust", 100.0).with_color(ChartColor::hex("#dea584"));

    assert_eq!(point.label, "Rust");
    assert!((point.value - 100.0).abs() < f64::EPSILON);
    assert_eq!(point.color, Some(ChartColor::hex("#dea584")));
}

#[test]
fn duplicate_segment_keys_are_summed() {
    let group = CategoryGroup::new(
        "2024-01-01",
        vec![
            Segment::new("APPLIED", 2.0),
            Segment::new("HIRED", 1.0),
            Segment::new("APPLIED", 3.0),
        ],
    );

    assert_eq!(group.segments.len(), 2);
    assert_eq!(group.value_of("APPLIED"), Some(5.0));
    assert!((group.total() - 6.0).abs() < f64::EPSILON);
}

#[test]
fn deserialized_groups_are_normalized() {
    let json = r#"{"label":"Acme","segments":[{"key":"A","value":1},{"key":"A","value":4}]}"#;
    let group: CategoryGroup = serde_json::from_str(json).unwrap();

    assert_eq!(group.segments, vec![Segment::new("A", 5.0)]);
}

#[test]
fn missing_key_has_no_value() {
    let group = CategoryGroup::new("x", vec![Segment::new("A", 1.0)]);
    assert_eq!(group.value_of("B"), None);
}

#[test]
fn series_color_defaults_to_empty() {
    let series: Series = serde_json::from_str(r#"{"label":"Users","points":[]}"#).unwrap();
    assert!(series.color.is_empty());
}
