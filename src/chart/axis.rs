//! Value gridlines and category labels shared by the cartesian charts.

use super::element::{GridLine, Label};
use super::format::format_value;
use super::geometry::{ChartGeometry, Shape};
use super::scale::{PlotArea, TICK_FRACTIONS, compute_axis_ticks};
use super::style::{ChartColor, TextAnchor};

pub(crate) const AXIS_FONT_SIZE: f64 = 10.0;

/// Gridlines at each tick fraction with the rounded value at the left edge.
pub(crate) fn draw_value_grid(geometry: &mut ChartGeometry, max: f64, plot: &PlotArea) {
    let grid_color = ChartColor::css_var("border");
    let right = plot.width - plot.padding.right;

    for tick in compute_axis_ticks(max, &TICK_FRACTIONS, plot) {
        geometry.push(Shape::GridLine(GridLine {
            x1: plot.padding.left,
            x2: right,
            y: tick.y,
            color: grid_color.clone(),
        }));
        geometry.push(Shape::Text(
            Label::new(plot.padding.left - 10.0, tick.y + 4.0, format_value(tick.value.round()))
                .with_anchor(TextAnchor::End)
                .with_font_size(AXIS_FONT_SIZE),
        ));
    }
}

/// Centered category label below the baseline.
pub(crate) fn draw_category_label(geometry: &mut ChartGeometry, x: f64, plot: &PlotArea, text: &str) {
    geometry.push(Shape::Text(
        Label::new(x, plot.baseline_y() + 20.0, text)
            .with_anchor(TextAnchor::Middle)
            .with_font_size(AXIS_FONT_SIZE),
    ));
}
