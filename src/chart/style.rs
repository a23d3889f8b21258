//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use serde::{Deserialize, Serialize};

const CSS_VAR_PREFIX: &str = "var(--color-";

/// Color specification supporting CSS variables for theming.
///
/// Serialized as the CSS string it renders to, so payloads can carry either
/// `"#22c55e"` or `"var(--color-chart-primary)"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartColor {
    /// Direct color literal (e.g., "#22c55e")
    Hex(String),
    /// CSS variable reference (e.g., "muted" → "var(--color-muted)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Fill used for empty rings and bar tracks.
    #[must_use]
    pub fn neutral() -> Self {
        Self::hex("#eeeeee")
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("{CSS_VAR_PREFIX}{name})"),
        }
    }
}

impl From<String> for ChartColor {
    fn from(value: String) -> Self {
        match value
            .strip_prefix(CSS_VAR_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(name) => Self::CssVar(name.to_string()),
            None => Self::Hex(value),
        }
    }
}

impl From<&str> for ChartColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ChartColor> for String {
    fn from(color: ChartColor) -> Self {
        color.to_css()
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
