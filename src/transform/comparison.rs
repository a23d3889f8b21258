use crate::align::{RankedItem, RankedList, unify_category_axis};
use crate::chart::{CategoryGroup, DataPoint, Segment};
use crate::models::{CountryRanking, CountryTrend, JobsByCompany};

pub const USERS_KEY: &str = "Users";
pub const JOBS_KEY: &str = "Jobs";
pub const JOB_COUNT_KEY: &str = "Job Count";
pub const TOTAL_APPS_KEY: &str = "Total Apps";

#[allow(clippy::cast_precision_loss)]
fn ranked(name: &str, ranking: &CountryRanking) -> RankedList {
    RankedList::new(
        name,
        ranking
            .data
            .iter()
            .map(|c| RankedItem::new(c.country.clone(), c.count as f64))
            .collect(),
    )
}

/// Countries ranked by users and by jobs, side by side, largest combined total first.
#[must_use]
pub fn country_comparison(by_user: &CountryRanking, by_job: &CountryRanking) -> Vec<CategoryGroup> {
    let mut groups = unify_category_axis(&[ranked(USERS_KEY, by_user), ranked(JOBS_KEY, by_job)]);
    groups.sort_by(|a, b| b.total().total_cmp(&a.total()));
    groups
}

/// Job count and application total per company, most jobs first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn company_comparison(rows: &[JobsByCompany]) -> Vec<CategoryGroup> {
    let mut sorted: Vec<&JobsByCompany> = rows.iter().collect();
    sorted.sort_by(|a, b| b.job_count.cmp(&a.job_count));
    sorted
        .into_iter()
        .map(|row| {
            CategoryGroup::new(
                row.company_name.clone(),
                vec![
                    Segment::new(JOB_COUNT_KEY, row.job_count as f64),
                    Segment::new(TOTAL_APPS_KEY, row.total_applications as f64),
                ],
            )
        })
        .collect()
}

/// Sum each leading country's daily counts, largest first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn country_trend_totals(trend: &CountryTrend) -> Vec<DataPoint> {
    let mut totals: Vec<DataPoint> = trend
        .top_countries
        .iter()
        .map(|country| {
            let total: u64 = trend
                .data
                .iter()
                .filter(|row| &row.country == country)
                .map(|row| row.count)
                .sum();
            DataPoint::new(country.clone(), total as f64)
        })
        .collect();
    totals.sort_by(|a, b| b.value.total_cmp(&a.value));
    totals
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
