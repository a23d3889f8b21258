//! Card-level reshaping of API payloads into chart and table inputs.

mod company_table;
mod comparison;
mod grouping;
mod status_trend;

pub use company_table::CompanyStatusTable;
pub use comparison::{
    JOB_COUNT_KEY, JOBS_KEY, TOTAL_APPS_KEY, USERS_KEY, company_comparison, country_comparison,
    country_trend_totals,
};
pub use grouping::{KeyedGroup, group_by_key, is_grouped_contiguously};
pub use status_trend::status_trend_groups;
