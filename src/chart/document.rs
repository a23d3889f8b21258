//! One `<svg>` document per chart.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;
use super::style::ChartColor;

/// Streams shapes into a chart document. The opening tag and `<title>`
/// are written on [`SvgDocument::open`], so shapes render in push order.
#[derive(Debug)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDocument {
    #[must_use]
    pub fn open(width: f64, height: f64, title: &str) -> Self {
        let mut body = String::new();
        let _ = writeln!(
            body,
            r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" role="img" class="insights-chart">"#
        );
        if !title.is_empty() {
            let _ = writeln!(body, "    <title>{}</title>", html_escape(title));
        }
        Self {
            width,
            height,
            body,
        }
    }

    pub fn shape<E: SvgElement + ?Sized>(&mut self, element: &E) {
        self.indented(&element.render());
    }

    /// Muted text centered in the plot, used instead of marks.
    pub fn message(&mut self, message: &str) {
        let fill = ChartColor::css_var("text-muted").to_css();
        let text = format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{fill}" font-size="14">{}</text>"#,
            self.width / 2.0,
            self.height / 2.0,
            html_escape(message)
        );
        self.indented(&text);
    }

    #[must_use]
    pub fn close(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }

    fn indented(&mut self, fragment: &str) {
        for line in fragment.lines() {
            let _ = writeln!(self.body, "    {line}");
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
