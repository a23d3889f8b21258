//! Horizontal bar list: one labelled row per data point.

use super::data::DataPoint;
use super::element::{Bar, Label};
use super::format::format_value;
use super::geometry::{ChartGeometry, HitArea, Shape};
use super::style::{ChartColor, TextAnchor};

pub const EMPTY_MESSAGE: &str = "No data";

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBarConfig {
    pub width: f64,
    pub row_height: f64,
    pub bar_thickness: f64,
    pub label_width: f64,
    pub value_width: f64,
    pub padding: f64,
    pub color: ChartColor,
}

impl Default for SimpleBarConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            row_height: 28.0,
            bar_thickness: 8.0,
            label_width: 160.0,
            value_width: 50.0,
            padding: 8.0,
            color: ChartColor::hex("#3b82f6"),
        }
    }
}

impl SimpleBarConfig {
    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }
}

/// Bars are proportional to the largest value; a zero maximum scales against 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn simple_bar(title: &str, data: &[DataPoint], config: &SimpleBarConfig) -> ChartGeometry {
    let rows = data.len().max(1) as f64;
    let height = rows.mul_add(config.row_height, config.padding * 2.0);
    if data.is_empty() {
        return ChartGeometry::placeholder(title, config.width, height, EMPTY_MESSAGE);
    }

    let max = data.iter().map(|d| d.value).fold(0.0, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    let track_x = config.label_width;
    let track_width = (config.width - config.label_width - config.value_width).max(0.0);

    let mut geometry = ChartGeometry::new(title, config.width, height);
    for (i, point) in data.iter().enumerate() {
        let row_top = (i as f64).mul_add(config.row_height, config.padding);
        let bar_y = row_top + (config.row_height - config.bar_thickness) / 2.0;
        let text_y = row_top + config.row_height / 2.0 + 4.0;
        let width = (point.value / max).clamp(0.0, 1.0) * track_width;

        geometry.push(Shape::Text(Label::new(0.0, text_y, point.label.clone())));
        geometry.push(Shape::Rect(Bar {
            x: track_x,
            y: bar_y,
            width: track_width,
            height: config.bar_thickness,
            color: ChartColor::neutral(),
            label: point.label.clone(),
            value: point.value,
        }));
        geometry.push(Shape::Rect(Bar {
            x: track_x,
            y: bar_y,
            width,
            height: config.bar_thickness,
            color: point.color.clone().unwrap_or_else(|| config.color.clone()),
            label: point.label.clone(),
            value: point.value,
        }));
        geometry.push(Shape::Text(
            Label::new(config.width, text_y, format_value(point.value))
                .with_anchor(TextAnchor::End)
                .bold(),
        ));
        geometry.push_hit(
            HitArea::Rect {
                x: track_x,
                y: bar_y,
                width: track_width,
                height: config.bar_thickness,
            },
            point.label.clone(),
            point.value,
        );
    }

    geometry
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
