//! Text formatting helpers shared by chart renderers and the HTML report.

use chrono::{Datelike, NaiveDate};

/// Escape text for safe inclusion in SVG/HTML content and attributes.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Compact integer display: `9999`, `15.5K`, `2.5M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(n: i64) -> String {
    let abs = n.unsigned_abs();
    if abs >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if abs >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Display a chart value: whole numbers without a fraction, others with one decimal.
#[must_use]
pub fn format_value(value: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let value = value + 0.0;
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Axis label for an ISO `YYYY-MM-DD` date: `M/D`. Unparseable input is returned as-is.
#[must_use]
pub fn short_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").map_or_else(
        |_| iso.to_string(),
        |date| format!("{}/{}", date.month(), date.day()),
    )
}

/// Status keys arrive as `NOT_ACCEPTED`; display them as `NOT ACCEPTED`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
