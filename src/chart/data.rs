//! Chart input model.
//!
//! All shapes deserialize from the JSON files accepted by `insights-dash chart`
//! and are produced by the dashboard transforms.

use serde::{Deserialize, Serialize};

use super::style::ChartColor;

/// A single labelled value, drawn as one row of a simple bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    /// Optional color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// One keyed measurement inside a category group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub key: String,
    pub value: f64,
}

impl Segment {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A category (usually a date or a name) with one segment per series.
///
/// Segment keys are unique within a group: duplicates are merged by summing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCategoryGroup")]
pub struct CategoryGroup {
    pub label: String,
    pub segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct RawCategoryGroup {
    label: String,
    #[serde(default)]
    segments: Vec<Segment>,
}

impl From<RawCategoryGroup> for CategoryGroup {
    fn from(raw: RawCategoryGroup) -> Self {
        Self::new(raw.label, raw.segments)
    }
}

impl CategoryGroup {
    #[must_use]
    pub fn new(label: impl Into<String>, segments: Vec<Segment>) -> Self {
        let label = label.into();
        let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
        for segment in segments {
            if let Some(existing) = merged.iter_mut().find(|s| s.key == segment.key) {
                tracing::warn!(
                    group = %label,
                    key = %segment.key,
                    "Duplicate segment key, summing values"
                );
                existing.value += segment.value;
            } else {
                merged.push(segment);
            }
        }
        Self {
            label,
            segments: merged,
        }
    }

    /// Sum of all segment values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<f64> {
        self.segments.iter().find(|s| s.key == key).map(|s| s.value)
    }
}

/// A dated value in a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// A named, colored line of dated points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    /// Empty means "pick from the default palette".
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub points: Vec<SeriesPoint>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            points,
        }
    }
}

/// A share of a pie or donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: ChartColor,
}

impl PieSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: ChartColor) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
