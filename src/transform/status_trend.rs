use std::collections::BTreeMap;

use indexmap::IndexSet;

use crate::chart::{CategoryGroup, Segment, short_date};
use crate::models::StatusTrendRow;

/// Pivot `(date, status, count)` rows into one group per date.
///
/// Dates are sorted ascending and labelled `M/D`. Statuses keep the order
/// they first appear in; zero counts are dropped from a group. Returns the
/// groups and the full status list for the legend.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn status_trend_groups(rows: &[StatusTrendRow]) -> (Vec<CategoryGroup>, Vec<String>) {
    let statuses: IndexSet<&str> = rows.iter().map(|r| r.status.as_str()).collect();

    let mut by_date: BTreeMap<&str, Vec<&StatusTrendRow>> = BTreeMap::new();
    for row in rows {
        by_date.entry(row.date.as_str()).or_default().push(row);
    }

    let groups = by_date
        .into_iter()
        .map(|(date, day_rows)| {
            let segments = statuses
                .iter()
                .filter_map(|status| {
                    let count = day_rows
                        .iter()
                        .find(|r| r.status == *status)
                        .map_or(0, |r| r.count);
                    (count > 0).then(|| Segment::new(*status, count as f64))
                })
                .collect();
            CategoryGroup::new(short_date(date), segments)
        })
        .collect();

    (groups, statuses.into_iter().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "status_trend_tests.rs"]
mod tests;
