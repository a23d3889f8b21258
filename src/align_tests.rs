use super::*;
use crate::chart::SeriesPoint;

#[test]
fn date_axis_is_sorted_union() {
    let series = vec![
        Series::new(
            "A",
            "#3b82f6",
            vec![SeriesPoint::new("2024-01-01", 1.0), SeriesPoint::new("2024-01-03", 2.0)],
        ),
        Series::new("B", "#10b981", vec![SeriesPoint::new("2024-01-02", 5.0)]),
    ];

    assert_eq!(
        unify_date_axis(&series),
        vec!["2024-01-01", "2024-01-02", "2024-01-03"]
    );
}

#[test]
fn date_axis_removes_duplicates() {
    let series = vec![
        Series::new("A", "", vec![SeriesPoint::new("2024-02-01", 1.0)]),
        Series::new("B", "", vec![SeriesPoint::new("2024-02-01", 2.0)]),
    ];
    assert_eq!(unify_date_axis(&series), vec!["2024-02-01"]);
}

#[test]
fn empty_series_give_empty_axis() {
    assert!(unify_date_axis(&[]).is_empty());
}

#[test]
fn category_axis_fills_missing_with_zero() {
    let sources = vec![
        RankedList::new(
            "Users",
            vec![RankedItem::new("India", 10.0), RankedItem::new("Nepal", 4.0)],
        ),
        RankedList::new("Jobs", vec![RankedItem::new("Kenya", 2.0), RankedItem::new("India", 7.0)]),
    ];

    let groups = unify_category_axis(&sources);
    let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["India", "Nepal", "Kenya"]);

    let nepal = &groups[1];
    assert_eq!(nepal.value_of("Users"), Some(4.0));
    assert_eq!(nepal.value_of("Jobs"), Some(0.0));
    assert_eq!(groups[0].value_of("Jobs"), Some(7.0));
}

#[test]
fn repeated_key_in_one_source_keeps_first_value() {
    let sources = vec![RankedList::new(
        "Users",
        vec![RankedItem::new("India", 3.0), RankedItem::new("India", 9.0)],
    )];
    let groups = unify_category_axis(&sources);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].value_of("Users"), Some(3.0));
}
