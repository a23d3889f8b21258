//! Pie and donut charts.

use super::data::PieSlice;
use super::element::{Disc, Label, Wedge};
use super::format::format_value;
use super::geometry::{ChartGeometry, HitArea, LegendEntry, Shape};
use super::style::{ChartColor, TextAnchor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PieStyle {
    #[default]
    Pie,
    /// Pie with a hole showing the total.
    Donut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    pub style: PieStyle,
    pub diameter: f64,
    /// Ring thickness of a donut.
    pub ring_width: f64,
}

impl PieConfig {
    #[must_use]
    pub const fn pie() -> Self {
        Self {
            style: PieStyle::Pie,
            diameter: 150.0,
            ring_width: 20.0,
        }
    }

    #[must_use]
    pub const fn donut() -> Self {
        Self {
            style: PieStyle::Donut,
            diameter: 100.0,
            ring_width: 20.0,
        }
    }
}

impl Default for PieConfig {
    fn default() -> Self {
        Self::pie()
    }
}

/// Sum of the non-negative slice values; `+0.0` for an empty list.
fn slice_total(slices: &[PieSlice]) -> f64 {
    slices.iter().fold(0.0, |acc, s| acc + s.value.max(0.0))
}

/// Start and end angle of every slice, in degrees clockwise from the top.
///
/// Returns `None` when the total is not positive.
#[must_use]
pub fn slice_angles(slices: &[PieSlice]) -> Option<Vec<(f64, f64)>> {
    let total = slice_total(slices);
    if total <= 0.0 {
        return None;
    }

    let mut cursor = 0.0;
    Some(
        slices
            .iter()
            .map(|slice| {
                let start = cursor;
                cursor += slice.value.max(0.0) / total * 360.0;
                (start, cursor)
            })
            .collect(),
    )
}

/// A zero or empty total draws a single neutral ring instead of slices.
#[must_use]
pub fn pie_chart(title: &str, slices: &[PieSlice], config: &PieConfig) -> ChartGeometry {
    let size = config.diameter;
    let (cx, cy) = (size / 2.0, size / 2.0);
    let radius = size / 2.0;
    let total = slice_total(slices);

    let mut geometry = ChartGeometry::new(title, size, size);

    match slice_angles(slices) {
        Some(angles) => {
            for (slice, (start, end)) in slices.iter().zip(angles) {
                if end - start <= 0.0 {
                    continue;
                }
                geometry.push(Shape::Wedge(Wedge {
                    cx,
                    cy,
                    radius,
                    start_angle: start,
                    end_angle: end,
                    color: slice.color.clone(),
                    label: slice.label.clone(),
                    value: slice.value,
                }));
                let mid = ((start + end) / 2.0).to_radians();
                geometry.push_hit(
                    HitArea::Point {
                        x: (radius * 0.6).mul_add(mid.sin(), cx),
                        y: (radius * 0.6).mul_add(-mid.cos(), cy),
                        radius: radius * 0.4,
                    },
                    slice.label.clone(),
                    slice.value,
                );
            }
        }
        None => geometry.push(Shape::Disc(Disc {
            cx,
            cy,
            radius,
            color: ChartColor::neutral(),
        })),
    }

    if config.style == PieStyle::Donut {
        geometry.push(Shape::Disc(Disc {
            cx,
            cy,
            radius: (radius - config.ring_width).max(0.0),
            color: ChartColor::hex("#ffffff"),
        }));
        geometry.push(Shape::Text(
            Label::new(cx, cy + 5.0, format_value(total))
                .with_anchor(TextAnchor::Middle)
                .with_font_size(14.0)
                .with_color(ChartColor::css_var("text"))
                .bold(),
        ));
    }

    geometry.legend = slices
        .iter()
        .map(|s| LegendEntry::new(s.label.clone(), s.color.clone()).with_value(s.value))
        .collect();
    geometry
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
