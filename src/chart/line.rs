//! Multi-series line chart over a shared date axis.

use std::collections::HashMap;

use super::axis::{AXIS_FONT_SIZE, draw_value_grid};
use super::data::Series;
use super::element::{Label, Marker, Polyline};
use super::format::short_date;
use super::geometry::{ChartGeometry, HitArea, LegendEntry, Shape};
use super::palette::DEFAULT_PALETTE;
use super::scale::{DEFAULT_HEADROOM, LINE_FLOOR, Padding, PlotArea, compute_max_with_headroom, line_x};
use super::style::{ChartColor, TextAnchor};
use crate::align::unify_date_axis;

pub const EMPTY_MESSAGE: &str = "No trend data available";

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub headroom: f64,
    /// At most this many date labels on the x axis; the last date is always labelled.
    pub max_x_labels: usize,
    pub stroke_width: f64,
    pub marker_radius: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            padding: Padding::LINE,
            headroom: DEFAULT_HEADROOM,
            max_x_labels: 7,
            stroke_width: 3.0,
            marker_radius: 6.0,
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }
}

fn series_color(series: &Series, index: usize) -> ChartColor {
    if series.color.is_empty() {
        ChartColor::hex(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()])
    } else {
        ChartColor::from(series.color.as_str())
    }
}

/// Draw every series against the union of their dates.
///
/// Each series is plotted at the positions of the dates it has; there is no
/// interpolation for dates it lacks. Series with no points get a legend entry
/// but no line.
#[must_use]
pub fn line_chart(title: &str, series: &[Series], config: &LineChartConfig) -> ChartGeometry {
    let plot = PlotArea::new(config.width, config.height, config.padding);
    if series.iter().all(|s| s.points.is_empty()) {
        return ChartGeometry::placeholder(title, plot.width, plot.height, EMPTY_MESSAGE);
    }

    let dates = unify_date_axis(series);
    let positions: HashMap<&str, usize> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| (date.as_str(), i))
        .collect();
    let max = compute_max_with_headroom(
        series.iter().flat_map(|s| s.points.iter().map(|p| p.value)),
        config.headroom,
        LINE_FLOOR,
    );

    let mut geometry = ChartGeometry::new(title, plot.width, plot.height);
    draw_value_grid(&mut geometry, max, &plot);

    let step = dates.len().div_ceil(config.max_x_labels.max(1)).max(1);
    for (i, date) in dates.iter().enumerate() {
        if i % step == 0 || i + 1 == dates.len() {
            geometry.push(Shape::Text(
                Label::new(line_x(i, dates.len(), &plot), plot.height - 5.0, short_date(date))
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(AXIS_FONT_SIZE),
            ));
        }
    }

    for (index, line) in series.iter().enumerate() {
        let color = series_color(line, index);
        geometry
            .legend
            .push(LegendEntry::new(line.label.clone(), color.clone()));

        if line.points.is_empty() {
            continue;
        }

        let mut sorted: Vec<_> = line.points.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));

        let coords: Vec<(f64, f64)> = sorted
            .iter()
            .filter_map(|p| {
                positions
                    .get(p.date.as_str())
                    .map(|&i| (line_x(i, dates.len(), &plot), plot.y_for(p.value, max)))
            })
            .collect();

        geometry.push(Shape::Polyline(
            Polyline::new(coords.clone(), color.clone()).with_stroke_width(config.stroke_width),
        ));

        for (point, (x, y)) in sorted.iter().zip(coords) {
            let label = format!("{} {}", line.label, short_date(&point.date));
            geometry.push(Shape::Marker(Marker {
                cx: x,
                cy: y,
                radius: config.marker_radius,
                color: color.clone(),
                label: label.clone(),
                value: point.value,
            }));
            geometry.push_hit(
                HitArea::Point {
                    x,
                    y,
                    radius: config.marker_radius + 2.0,
                },
                label,
                point.value,
            );
        }
    }

    geometry
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
