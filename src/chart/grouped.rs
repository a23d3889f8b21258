//! Grouped (side-by-side) bar chart.

use super::axis::{draw_category_label, draw_value_grid};
use super::element::Bar;
use super::geometry::{ChartGeometry, HitArea, LegendEntry, Shape};
use super::palette::{ColorMap, assign_colors, default_palette};
use super::scale::{
    BAR_FLOOR, DEFAULT_HEADROOM, Padding, PlotArea, compute_max_with_headroom, scrollable_width,
    slot,
};
use super::style::ChartColor;
use crate::chart::data::CategoryGroup;

pub const EMPTY_MESSAGE: &str = "No data available";

/// Layout shared by the grouped and stacked bar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChartConfig {
    pub height: f64,
    /// Chart width when groups fit without scrolling.
    pub min_width: f64,
    /// Each group gets at least this much width; wider charts scroll.
    pub min_group_width: f64,
    pub padding: Padding,
    pub headroom: f64,
    /// Fixed colors per segment key.
    pub colors: ColorMap,
    /// Cycled for keys without a fixed color.
    pub palette: Vec<ChartColor>,
}

impl Default for CategoryChartConfig {
    fn default() -> Self {
        Self {
            height: 300.0,
            min_width: 800.0,
            min_group_width: 100.0,
            padding: Padding::BAR,
            headroom: DEFAULT_HEADROOM,
            colors: ColorMap::new(),
            palette: default_palette(),
        }
    }
}

impl CategoryChartConfig {
    #[must_use]
    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<ChartColor>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_min_group_width(mut self, width: f64) -> Self {
        self.min_group_width = width;
        self
    }

    #[must_use]
    pub const fn with_headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }

    pub(crate) fn plot_for(&self, group_count: usize) -> PlotArea {
        let width = scrollable_width(group_count, self.min_group_width, &self.padding, self.min_width);
        PlotArea::new(width, self.height, self.padding)
    }

    /// Colors for every segment key, in first-seen order across groups.
    pub(crate) fn colors_for(&self, groups: &[CategoryGroup]) -> ColorMap {
        let keys = groups
            .iter()
            .flat_map(|g| g.segments.iter().map(|s| s.key.as_str()));
        assign_colors(keys, &self.colors, &self.palette)
    }
}

pub(crate) fn legend_for(colors: &ColorMap) -> Vec<LegendEntry> {
    colors
        .iter()
        .map(|(key, color)| LegendEntry::new(key.clone(), color.clone()))
        .collect()
}

/// Largest single segment value. Grouped bars scale against this.
#[must_use]
pub fn grouped_domain_max(groups: &[CategoryGroup]) -> f64 {
    groups
        .iter()
        .flat_map(|g| g.segments.iter().map(|s| s.value))
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Draw one bar per segment, side by side within each group.
///
/// Segments are placed by their position in the group, so a group missing a
/// key simply draws fewer bars.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn grouped_bar(title: &str, groups: &[CategoryGroup], config: &CategoryChartConfig) -> ChartGeometry {
    let plot = config.plot_for(groups.len());
    if groups.is_empty() {
        return ChartGeometry::placeholder(title, plot.width, plot.height, EMPTY_MESSAGE);
    }

    let max = compute_max_with_headroom([grouped_domain_max(groups)], config.headroom, BAR_FLOOR);
    let colors = config.colors_for(groups);
    let max_segments = groups.iter().map(|g| g.segments.len()).max().unwrap_or(0).max(1);

    let mut geometry = ChartGeometry::new(title, plot.width, plot.height);
    draw_value_grid(&mut geometry, max, &plot);

    for (group_index, group) in groups.iter().enumerate() {
        let group_slot = slot(group_index, groups.len(), &plot);
        let bar_width = group_slot.width * 0.8 / max_segments as f64;
        let group_padding = group_slot.width * 0.1;

        for (segment_index, segment) in group.segments.iter().enumerate() {
            let x = bar_width.mul_add(segment_index as f64, group_slot.start + group_padding);
            let height = plot.height_for(segment.value.max(0.0), max);
            let y = plot.baseline_y() - height;
            let label = format!("{} - {}", group.label, segment.key);

            geometry.push(Shape::Rect(Bar {
                x,
                y,
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
                    y,
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
#[path = "grouped_tests.rs"]
mod tests;
