//! Value-to-pixel mapping shared by all cartesian charts.

use serde::{Deserialize, Serialize};

/// Multiplier applied to the largest value so the tallest mark never touches the top edge.
pub const DEFAULT_HEADROOM: f64 = 1.1;
/// Axis maximum for line charts whose values are all zero.
pub const LINE_FLOOR: f64 = 5.0;
/// Axis maximum for bar charts whose values are all zero.
pub const BAR_FLOOR: f64 = 1.0;
/// Horizontal gridline positions as fractions of the axis maximum.
pub const TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const LINE: Self = Self::new(20.0, 20.0, 30.0, 40.0);
    pub const BAR: Self = Self::new(20.0, 20.0, 40.0, 40.0);

    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Overall SVG size and the padding around the plotting rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl PlotArea {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: Padding) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width available for marks.
    #[must_use]
    pub fn chart_width(&self) -> f64 {
        (self.width - self.padding.horizontal()).max(0.0)
    }

    /// Height available for marks.
    #[must_use]
    pub fn chart_height(&self) -> f64 {
        (self.height - self.padding.vertical()).max(0.0)
    }

    /// Y coordinate of the value-zero line.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.padding.top + self.chart_height()
    }

    /// Pixel height of `value` on an axis topping out at `max`.
    #[must_use]
    pub fn height_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        (value / max) * self.chart_height()
    }

    /// Y coordinate of `value` on an axis topping out at `max`.
    #[must_use]
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        self.baseline_y() - self.height_for(value, max)
    }
}

/// Width of a chart that keeps every group at least `min_group_width` wide,
/// growing past `min_width` (and scrolling) when there are many groups.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scrollable_width(group_count: usize, min_group_width: f64, padding: &Padding, min_width: f64) -> f64 {
    (group_count as f64)
        .mul_add(min_group_width, padding.horizontal())
        .max(min_width)
}

/// Axis maximum: the largest value times `headroom`, or `floor` when there is
/// nothing positive to show.
#[must_use]
pub fn compute_max_with_headroom<I>(values: I, headroom: f64, floor: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 { max * headroom } else { floor }
}

/// A horizontal gridline and its label value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
}

#[must_use]
pub fn compute_axis_ticks(max: f64, fractions: &[f64], plot: &PlotArea) -> Vec<AxisTick> {
    fractions
        .iter()
        .map(|fraction| {
            let value = max * fraction;
            AxisTick {
                value,
                y: plot.y_for(value, max),
            }
        })
        .collect()
}

/// X coordinate of point `index` when `count` points span the plot edge to edge.
/// A single point sits at the left edge.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn line_x(index: usize, count: usize, plot: &PlotArea) -> f64 {
    let divisor = count.saturating_sub(1).max(1) as f64;
    (index as f64 / divisor).mul_add(plot.chart_width(), plot.padding.left)
}

/// Horizontal slot for category `index` of `count` equal-width categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub start: f64,
    pub width: f64,
}

impl Slot {
    #[must_use]
    pub fn center(&self) -> f64 {
        self.width.mul_add(0.5, self.start)
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slot(index: usize, count: usize, plot: &PlotArea) -> Slot {
    let width = plot.chart_width() / count.max(1) as f64;
    Slot {
        start: width.mul_add(index as f64, plot.padding.left),
        width,
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
