//! Deterministic color assignment for series and segments.

use indexmap::IndexMap;

use super::style::ChartColor;

/// Series key to color, in first-seen key order.
pub type ColorMap = IndexMap<String, ChartColor>;

pub const DEFAULT_PALETTE: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899",
];

/// Fixed colors for application statuses.
pub const STATUS_COLORS: [(&str, &str); 5] = [
    ("APPLIED", "#3b82f6"),
    ("SHORTLISTED", "#f59e0b"),
    ("REJECTED", "#ef4444"),
    ("HIRED", "#10b981"),
    ("INTERVIEW", "#8b5cf6"),
];

/// Used only when a caller passes an empty palette.
const FALLBACK_COLOR: &str = "#9ca3af";

#[must_use]
pub fn default_palette() -> Vec<ChartColor> {
    DEFAULT_PALETTE.iter().copied().map(ChartColor::hex).collect()
}

#[must_use]
pub fn status_colors() -> ColorMap {
    STATUS_COLORS
        .iter()
        .map(|(status, color)| ((*status).to_string(), ChartColor::hex(color)))
        .collect()
}

/// Assign a color to every distinct key.
///
/// Keys with a predefined color keep it. The rest cycle through `palette` in
/// first-seen order, counting only keys that fell back. The same input always
/// yields the same map.
#[must_use]
pub fn assign_colors<I, S>(keys: I, predefined: &ColorMap, palette: &[ChartColor]) -> ColorMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assigned = ColorMap::new();
    let mut fallback_count = 0usize;

    for key in keys {
        let key = key.as_ref();
        if assigned.contains_key(key) {
            continue;
        }
        let color = if let Some(color) = predefined.get(key) {
            color.clone()
        } else {
            let color = if palette.is_empty() {
                ChartColor::hex(FALLBACK_COLOR)
            } else {
                palette[fallback_count % palette.len()].clone()
            };
            fallback_count += 1;
            color
        };
        assigned.insert(key.to_string(), color);
    }

    assigned
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
