//! SVG chart rendering for the insights dashboard.
//!
//! Renderers are pure: they take chart data plus a config and return a
//! [`ChartGeometry`] describing positioned shapes, hover targets and the
//! legend. Geometry renders itself to SVG with:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration (`var(--color-*)`) for theming
//! - `<title>` elements on every mark for screen readers and native tooltips

mod axis;
mod bar;
mod data;
mod document;
mod element;
mod format;
mod geometry;
mod grouped;
mod hover;
mod line;
mod palette;
mod pie;
mod scale;
mod stacked;
mod style;

pub use bar::{SimpleBarConfig, simple_bar};
pub use data::{CategoryGroup, DataPoint, PieSlice, Segment, Series, SeriesPoint};
pub use document::SvgDocument;
pub use element::{Bar, Disc, GridLine, Label, Marker, Polyline, SvgElement, Wedge};
pub use format::{format_number, format_value, html_escape, humanize_key, short_date};
pub use geometry::{ChartGeometry, HitArea, HitRegion, LegendEntry, Shape};
pub use grouped::{CategoryChartConfig, grouped_bar, grouped_domain_max};
pub use hover::{HoverState, nearest_point};
pub use line::{LineChartConfig, line_chart};
pub use palette::{
    ColorMap, DEFAULT_PALETTE, STATUS_COLORS, assign_colors, default_palette, status_colors,
};
pub use pie::{PieConfig, PieStyle, pie_chart, slice_angles};
pub use scale::{
    AxisTick, BAR_FLOOR, DEFAULT_HEADROOM, LINE_FLOOR, Padding, PlotArea, Slot, TICK_FRACTIONS,
    compute_axis_ticks, compute_max_with_headroom, line_x, scrollable_width, slot,
};
pub use stacked::{stacked_bar, stacked_domain_max};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
