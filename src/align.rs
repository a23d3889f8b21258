//! Aligning independently fetched series onto one shared axis.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::{CategoryGroup, Segment, Series};

/// Sorted, de-duplicated union of every date in `series`.
#[must_use]
pub fn unify_date_axis(series: &[Series]) -> Vec<String> {
    series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.date.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One keyed value inside a ranked list (e.g. a country and its user count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub key: String,
    pub value: f64,
}

impl RankedItem {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A named source of ranked items; its name becomes the segment key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    pub name: String,
    pub items: Vec<RankedItem>,
}

impl RankedList {
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<RankedItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Merge several ranked lists into one group per distinct item key.
///
/// Keys keep first-seen order across sources. Every group carries one segment
/// per source, zero where a source lacks the key. If a source repeats a key,
/// its first value is used.
#[must_use]
pub fn unify_category_axis(sources: &[RankedList]) -> Vec<CategoryGroup> {
    let mut table: IndexMap<&str, Vec<Option<f64>>> = IndexMap::new();

    for (source_index, source) in sources.iter().enumerate() {
        for item in &source.items {
            let values = table
                .entry(item.key.as_str())
                .or_insert_with(|| vec![None; sources.len()]);
            if values[source_index].is_none() {
                values[source_index] = Some(item.value);
            }
        }
    }

    table
        .into_iter()
        .map(|(key, values)| {
            let segments = sources
                .iter()
                .zip(values)
                .map(|(source, value)| Segment::new(source.name.clone(), value.unwrap_or(0.0)))
                .collect();
            CategoryGroup::new(key, segments)
        })
        .collect()
}

#[cfg(test)]
#[path = "align_tests.rs"]
mod tests;
