//! Primitive SVG elements: bars, polylines, markers, wedges, and text.

use std::fmt::Write;

use super::format::{format_value, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A filled rectangle with a hover title.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" rx="2">
    <title>{escaped_label}: {}</title>
</rect>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            format_value(self.value)
        )
    }
}

/// An open polyline through data points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
}

impl Polyline {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

impl SvgElement for Polyline {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();
        let mut points = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            let _ = write!(points, "{x},{y}");
        }

        format!(
            r#"<polyline points="{points}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width
        )
    }
}

/// A hollow circle marking one data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="white" stroke="{color}" stroke-width="2">
    <title>{escaped_label}: {}</title>
</circle>"#,
            self.cx,
            self.cy,
            self.radius,
            format_value(self.value)
        )
    }
}

/// A filled circle, used for empty rings and the donut hole.
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: ChartColor,
}

impl SvgElement for Disc {
    fn render(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.cx,
            self.cy,
            self.radius,
            self.color.to_css()
        )
    }
}

/// A pie slice. Angles are degrees clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl Wedge {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    fn point_at(&self, angle: f64) -> (f64, f64) {
        let radians = angle.to_radians();
        (
            self.radius.mul_add(radians.sin(), self.cx),
            self.radius.mul_add(-radians.cos(), self.cy),
        )
    }
}

impl SvgElement for Wedge {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let title = format!(
            "<title>{}: {}</title>",
            html_escape(&self.label),
            format_value(self.value)
        );

        // An arc cannot start and end on the same point.
        if self.sweep() >= 360.0 - 1e-6 {
            return format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{color}">
    {title}
</circle>"#,
                self.cx, self.cy, self.radius
            );
        }

        let (x1, y1) = self.point_at(self.start_angle);
        let (x2, y2) = self.point_at(self.end_angle);
        let large_arc = u8::from(self.sweep() > 180.0);
        format!(
            r#"<path d="M{},{} L{x1},{y1} A{},{} 0 {large_arc} 1 {x2},{y2} Z" fill="{color}">
    {title}
</path>"#,
            self.cx, self.cy, self.radius, self.radius
        )
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
    pub bold: bool,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Start,
            font_size: 12.0,
            color: ChartColor::css_var("text-muted"),
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let weight = if self.bold {
            r#" font-weight="bold""#
        } else {
            ""
        };
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}"{weight}>{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

/// A horizontal gridline across the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub color: ChartColor,
}

impl SvgElement for GridLine {
    fn render(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            self.x1,
            self.y,
            self.x2,
            self.y,
            self.color.to_css()
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
