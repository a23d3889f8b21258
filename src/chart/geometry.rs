//! Renderer output: positioned shapes, hover targets, and legend entries.
//!
//! Every renderer returns a [`ChartGeometry`]. It is either a placeholder
//! message (empty input) or a list of shapes. It renders itself to SVG, and
//! tests assert on the shapes directly.

use serde::Serialize;

use super::document::SvgDocument;
use super::element::{Bar, Disc, GridLine, Label, Marker, Polyline, SvgElement, Wedge};
use super::style::ChartColor;

/// One drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Bar),
    Polyline(Polyline),
    Marker(Marker),
    Disc(Disc),
    Wedge(Wedge),
    Text(Label),
    GridLine(GridLine),
}

impl SvgElement for Shape {
    fn render(&self) -> String {
        match self {
            Self::Rect(e) => e.render(),
            Self::Polyline(e) => e.render(),
            Self::Marker(e) => e.render(),
            Self::Disc(e) => e.render(),
            Self::Wedge(e) => e.render(),
            Self::Text(e) => e.render(),
            Self::GridLine(e) => e.render(),
        }
    }
}

/// Area that responds to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitArea {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// A data point, hit within `radius`.
    Point { x: f64, y: f64, radius: f64 },
}

impl HitArea {
    /// Where the tooltip is anchored.
    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        match *self {
            Self::Rect { x, y, width, .. } => (width.mul_add(0.5, x), y),
            Self::Point { x, y, .. } => (x, y),
        }
    }
}

/// Hover target and the tooltip it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub area: HitArea,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: ChartColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: ChartColor) -> Self {
        Self {
            label: label.into(),
            color,
            value: None,
        }
    }

    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Set when there was nothing to draw.
    pub placeholder: Option<String>,
    pub shapes: Vec<Shape>,
    pub hit_regions: Vec<HitRegion>,
    pub legend: Vec<LegendEntry>,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(title: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            placeholder: None,
            shapes: Vec::new(),
            hit_regions: Vec::new(),
            legend: Vec::new(),
        }
    }

    #[must_use]
    pub fn placeholder(
        title: impl Into<String>,
        width: f64,
        height: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            placeholder: Some(message.into()),
            ..Self::new(title, width, height)
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn push_hit(&mut self, area: HitArea, label: impl Into<String>, value: f64) {
        self.hit_regions.push(HitRegion {
            area,
            label: label.into(),
            value,
        });
    }

    pub fn rects(&self) -> impl Iterator<Item = &Bar> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect(bar) => Some(bar),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Polyline(line) => Some(line),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Wedge(wedge) => Some(wedge),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Label> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text(label) => Some(label),
            _ => None,
        })
    }
}

impl SvgElement for ChartGeometry {
    fn render(&self) -> String {
        let mut doc = SvgDocument::open(self.width, self.height, &self.title);
        match &self.placeholder {
            Some(message) => doc.message(message),
            None => self.shapes.iter().for_each(|shape| doc.shape(shape)),
        }
        doc.close()
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
