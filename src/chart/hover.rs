//! Pointer tracking over a chart's hit regions.

use super::geometry::{HitArea, HitRegion};

/// Which hit region, if any, the pointer is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Rectangles win over points; among points the closest within its radius wins.
    pub fn pointer_move(&mut self, x: f64, y: f64, regions: &[HitRegion]) -> Option<usize> {
        self.hovered = regions
            .iter()
            .position(|r| match r.area {
                HitArea::Rect {
                    x: rx,
                    y: ry,
                    width,
                    height,
                } => x >= rx && x <= rx + width && y >= ry && y <= ry + height,
                HitArea::Point { .. } => false,
            })
            .or_else(|| nearest_region(x, y, regions));
        self.hovered
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn tooltip<'a>(&self, regions: &'a [HitRegion]) -> Option<&'a HitRegion> {
        self.hovered.and_then(|i| regions.get(i))
    }
}

fn nearest_region(x: f64, y: f64, regions: &[HitRegion]) -> Option<usize> {
    regions
        .iter()
        .enumerate()
        .filter_map(|(i, r)| match r.area {
            HitArea::Point {
                x: px,
                y: py,
                radius,
            } => {
                let distance = (px - x).hypot(py - y);
                (distance <= radius).then_some((i, distance))
            }
            HitArea::Rect { .. } => None,
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Index of the point closest to `(x, y)`, regardless of distance.
#[must_use]
pub fn nearest_point(x: f64, y: f64, points: &[(f64, f64)]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.0 - x)
                .hypot(a.1 - y)
                .total_cmp(&(b.0 - x).hypot(b.1 - y))
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;
