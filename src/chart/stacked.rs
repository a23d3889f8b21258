//! Stacked bar chart: one column per group, segments piled bottom-up.

use super::axis::{draw_category_label, draw_value_grid};
use super::element::Bar;
use super::geometry::{ChartGeometry, HitArea, Shape};
use super::grouped::{CategoryChartConfig, EMPTY_MESSAGE, legend_for};
use super::scale::{BAR_FLOOR, compute_max_with_headroom, slot};
use super::style::ChartColor;
use crate::chart::data::CategoryGroup;

const MAX_BAR_WIDTH: f64 = 40.0;
const BAR_WIDTH_RATIO: f64 = 0.6;

/// Largest group total. Stacked bars scale against this.
#[must_use]
pub fn stacked_domain_max(groups: &[CategoryGroup]) -> f64 {
    groups
        .iter()
        .map(stack_total)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

fn stack_total(group: &CategoryGroup) -> f64 {
    group.segments.iter().map(|s| s.value.max(0.0)).sum()
}

#[must_use]
pub fn stacked_bar(title: &str, groups: &[CategoryGroup], config: &CategoryChartConfig) -> ChartGeometry {
    let plot = config.plot_for(groups.len());
    if groups.is_empty() {
        return ChartGeometry::placeholder(title, plot.width, plot.height, EMPTY_MESSAGE);
    }

    let max = compute_max_with_headroom([stacked_domain_max(groups)], config.headroom, BAR_FLOOR);
    let colors = config.colors_for(groups);

    let mut geometry = ChartGeometry::new(title, plot.width, plot.height);
    draw_value_grid(&mut geometry, max, &plot);

    for (group_index, group) in groups.iter().enumerate() {
        let group_slot = slot(group_index, groups.len(), &plot);
        let bar_width = (group_slot.width * BAR_WIDTH_RATIO).min(MAX_BAR_WIDTH);
        let x = group_slot.center() - bar_width / 2.0;
        let mut top = plot.baseline_y();

        for segment in &group.segments {
            let height = plot.height_for(segment.value.max(0.0), max);
            if height <= 0.0 {
                continue;
            }
            top -= height;
            let label = format!("{} - {}", group.label, segment.key);

            geometry.push(Shape::Rect(Bar {
                x,
                y: top,
                width: bar_width,
                height,
                color: colors
                    .get(&segment.key)
                    .cloned()
                    .unwrap_or_else(ChartColor::neutral),
                label: label.clone(),
                value: segment.value,
            }));
            geometry.push_hit(
                HitArea::Rect {
                    x,
                    y: top,
                    width: bar_width,
                    height,
                },
                label,
                segment.value,
            );
        }

        draw_category_label(&mut geometry, group_slot.center(), &plot, &group.label);
    }

    geometry.legend = legend_for(&colors);
    geometry
}

#[cfg(test)]
#[path = "stacked_tests.rs"]
mod tests;
