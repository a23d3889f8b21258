use super::*;
use crate::chart::data::Segment;
use crate::chart::element::SvgElement;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn sample() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new("g1", vec![Segment::new("A", 10.0)]),
        CategoryGroup::new("g2", vec![Segment::new("A", 3.0), Segment::new("B", 3.0)]),
    ]
}

#[test]
fn empty_groups_render_placeholder() {
    let geometry = grouped_bar("Empty", &[], &CategoryChartConfig::default());
    assert!(geometry.is_placeholder());
    assert!(geometry.render().contains(EMPTY_MESSAGE));
}

#[test]
fn scales_against_largest_segment() {
    let groups = sample();
    assert!(approx(grouped_domain_max(&groups), 10.0));

    let config = CategoryChartConfig::default().with_headroom(1.0);
    let geometry = grouped_bar("Grouped", &groups, &config);
    let chart_height = config.plot_for(groups.len()).chart_height();

    let b_bar = geometry
        .rects()
        .find(|bar| bar.label == "g2 - B")
        .unwrap();
    assert!(approx(b_bar.height, 3.0 / 10.0 * chart_height));
}

#[test]
fn default_headroom_leaves_space_above_tallest_bar() {
    let config = CategoryChartConfig::default();
    let geometry = grouped_bar("Grouped", &sample(), &config);
    let chart_height = config.plot_for(2).chart_height();

    let tallest = geometry.rects().map(|b| b.height).fold(0.0, f64::max);
    assert!(approx(tallest, 10.0 / 11.0 * chart_height));
}

#[test]
fn bars_sit_side_by_side_within_a_group() {
    let geometry = grouped_bar("Grouped", &sample(), &CategoryChartConfig::default());
    let g2: Vec<_> = geometry
        .rects()
        .filter(|bar| bar.label.starts_with("g2"))
        .collect();

    assert_eq!(g2.len(), 2);
    assert!(approx(g2[1].x, g2[0].x + g2[0].width));
}

#[test]
fn missing_keys_draw_fewer_bars() {
    let geometry = grouped_bar("Grouped", &sample(), &CategoryChartConfig::default());
    assert_eq!(geometry.rects().count(), 3);
    assert_eq!(geometry.hit_regions.len(), 3);
}

#[test]
fn segment_colors_are_consistent_across_groups() {
    let geometry = grouped_bar("Grouped", &sample(), &CategoryChartConfig::default());
    let a_colors: Vec<_> = geometry
        .rects()
        .filter(|bar| bar.label.ends_with("- A"))
        .map(|bar| bar.color.clone())
        .collect();

    assert_eq!(a_colors.len(), 2);
    assert_eq!(a_colors[0], a_colors[1]);
    assert_eq!(geometry.legend.len(), 2);
}

#[test]
fn many_groups_widen_the_chart() {
    let groups: Vec<_> = (0..12)
        .map(|i| CategoryGroup::new(format!("c{i}"), vec![Segment::new("Jobs", 1.0)]))
        .collect();
    let config = CategoryChartConfig::default().with_min_group_width(200.0);
    let geometry = grouped_bar("Companies", &groups, &config);

    assert!(approx(geometry.width, 12.0 * 200.0 + 60.0));
}

#[test]
fn axis_top_is_the_grouped_domain_max() {
    let groups = vec![CategoryGroup::new(
        "g",
        vec![Segment::new("A", 4.0), Segment::new("B", 4.0)],
    )];
    let geometry = grouped_bar("Axis", &groups, &CategoryChartConfig::default().with_headroom(1.0));

    let top_tick = geometry
        .texts()
        .filter_map(|label| label.text.parse::<f64>().ok())
        .fold(0.0, f64::max);
    assert!(approx(top_tick, grouped_domain_max(&groups)));
    assert!(approx(top_tick, 4.0));
}

#[test]
fn all_zero_groups_use_the_bar_floor() {
    let groups = vec![CategoryGroup::new("g", vec![Segment::new("A", 0.0)])];
    assert!(approx(grouped_domain_max(&groups), 0.0));

    let geometry = grouped_bar("Axis", &groups, &CategoryChartConfig::default());
    assert!(geometry.texts().any(|label| label.text == "1"));
}
