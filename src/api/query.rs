use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::range::DateRange;
use crate::error::{DashError, Result};

/// Rows per request: a positive count or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageSize {
    Count(u32),
    All,
}

impl PageSize {
    /// # Errors
    /// Returns [`DashError::InvalidPageSize`] for zero.
    pub fn count(n: u32) -> Result<Self> {
        if n == 0 {
            return Err(DashError::InvalidPageSize(n.to_string()));
        }
        Ok(Self::Count(n))
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Count(10)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::All => write!(f, "all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<u32>()
            .map_err(|_| DashError::InvalidPageSize(s.to_string()))
            .and_then(Self::count)
    }
}

impl TryFrom<String> for PageSize {
    type Error = DashError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PageSize> for String {
    fn from(size: PageSize) -> Self {
        size.to_string()
    }
}

/// Which users an application-status listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationFilter {
    Applied,
    NotApplied,
    /// No filter parameter is sent.
    #[default]
    All,
}

impl ApplicationFilter {
    /// Wire value, or `None` for [`ApplicationFilter::All`].
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Applied => Some("applied"),
            Self::NotApplied => Some("not_applied"),
            Self::All => None,
        }
    }
}

/// How an endpoint accepts paging parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    None,
    /// `limit` only.
    LimitOnly,
    /// `page` and `limit`.
    Paged,
}

/// Every insights endpoint the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    TotalUsers,
    TopApplicants,
    TopJobRoles,
    TopTargetRoles,
    TopApplicantsSummary,
    UsersApplicationStatus,
    IncompleteProfiles,
    JobsByCompany,
    CompanyPopularity,
    JobStatusList,
    CompanyStatusCounts,
    TotalJobs,
    TotalTickets,
    TotalFeeds,
    EmployerPolicyStatus,
    ApplicationStatus,
    TopCountries,
    UserFeedEngagement,
    TopCommunities,
    TotalUsersTrend,
    TotalJobsTrend,
    TotalTicketsTrend,
    TotalFeedsTrend,
    EmployerPolicyTrend,
    TopCommunitiesTrend,
    ApplicationStatusTrend,
    TopCountriesTrend,
}

impl Query {
    pub const ALL: [Self; 27] = [
        Self::TotalUsers,
        Self::TopApplicants,
        Self::TopJobRoles,
        Self::TopTargetRoles,
        Self::TopApplicantsSummary,
        Self::UsersApplicationStatus,
        Self::IncompleteProfiles,
        Self::JobsByCompany,
        Self::CompanyPopularity,
        Self::JobStatusList,
        Self::CompanyStatusCounts,
        Self::TotalJobs,
        Self::TotalTickets,
        Self::TotalFeeds,
        Self::EmployerPolicyStatus,
        Self::ApplicationStatus,
        Self::TopCountries,
        Self::UserFeedEngagement,
        Self::TopCommunities,
        Self::TotalUsersTrend,
        Self::TotalJobsTrend,
        Self::TotalTicketsTrend,
        Self::TotalFeedsTrend,
        Self::EmployerPolicyTrend,
        Self::TopCommunitiesTrend,
        Self::ApplicationStatusTrend,
        Self::TopCountriesTrend,
    ];

    /// Endpoint path below `/insights/`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::TotalUsers => "total-users",
            Self::TopApplicants => "top-applicants",
            Self::TopJobRoles => "top-job-roles",
            Self::TopTargetRoles => "top-target-roles",
            Self::TopApplicantsSummary => "top-applicants-summary",
            Self::UsersApplicationStatus => "users-application-status",
            Self::IncompleteProfiles => "incomplete-profiles",
            Self::JobsByCompany => "jobs-by-company",
            Self::CompanyPopularity => "company-popularity",
            Self::JobStatusList => "job-status-list",
            Self::CompanyStatusCounts => "company-status-counts",
            Self::TotalJobs => "total-jobs",
            Self::TotalTickets => "total-tickets",
            Self::TotalFeeds => "total-feeds",
            Self::EmployerPolicyStatus => "employer-policy-status",
            Self::ApplicationStatus => "application-status",
            Self::TopCountries => "top-countries",
            Self::UserFeedEngagement => "user-feed-engagement",
            Self::TopCommunities => "top-communities",
            Self::TotalUsersTrend => "total-users-trend",
            Self::TotalJobsTrend => "total-jobs-trend",
            Self::TotalTicketsTrend => "total-tickets-trend",
            Self::TotalFeedsTrend => "total-feeds-trend",
            Self::EmployerPolicyTrend => "employer-policy-trend",
            Self::TopCommunitiesTrend => "top-communities-trend",
            Self::ApplicationStatusTrend => "application-status-trend",
            Self::TopCountriesTrend => "top-countries-trend",
        }
    }

    /// CSV file stem for exports, e.g. `top_applicants`.
    #[must_use]
    pub fn subject(self) -> String {
        self.path().replace('-', "_")
    }

    #[must_use]
    pub const fn pagination(self) -> Pagination {
        match self {
            Self::TopApplicants
            | Self::TopJobRoles
            | Self::TopTargetRoles
            | Self::TopApplicantsSummary
            | Self::UsersApplicationStatus
            | Self::IncompleteProfiles
            | Self::JobsByCompany
            | Self::CompanyPopularity
            | Self::JobStatusList
            | Self::CompanyStatusCounts
            | Self::UserFeedEngagement
            | Self::TopCommunities => Pagination::Paged,
            Self::TopCountries => Pagination::LimitOnly,
            _ => Pagination::None,
        }
    }

    #[must_use]
    pub const fn is_paginated(self) -> bool {
        matches!(self.pagination(), Pagination::Paged)
    }

    /// Whether the endpoint accepts `startDate`/`endDate`.
    #[must_use]
    pub const fn accepts_range(self) -> bool {
        !matches!(self, Self::ApplicationStatus)
    }

    #[must_use]
    pub const fn accepts_filter(self) -> bool {
        matches!(self, Self::UsersApplicationStatus)
    }

    /// Request URL for this query below `base_url` (e.g. `http://localhost:4000/api`).
    #[must_use]
    pub fn url(self, base_url: &str, params: &QueryParams) -> String {
        let mut query: Vec<(&str, String)> = Vec::new();
        match self.pagination() {
            Pagination::Paged => {
                query.push(("page", params.page.to_string()));
                query.push(("limit", params.limit.to_string()));
            }
            Pagination::LimitOnly => query.push(("limit", params.limit.to_string())),
            Pagination::None => {}
        }
        if self.accepts_filter()
            && let Some(filter) = params.filter.as_param()
        {
            query.push(("filter", filter.to_string()));
        }
        if self.accepts_range() {
            query.push(("startDate", params.range.start.clone()));
            query.push(("endDate", params.range.end.clone()));
        }

        let mut url = format!("{}/insights/{}", base_url.trim_end_matches('/'), self.path());
        for (i, (key, value)) in query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            let _ = write!(url, "{sep}{key}={value}");
        }
        url
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Query {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|q| q.path() == wanted)
            .ok_or_else(|| DashError::UnknownQuery(s.to_string()))
    }
}

/// Parameters for one request. Endpoints ignore what they do not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub page: u32,
    pub limit: PageSize,
    pub range: DateRange,
    pub filter: ApplicationFilter,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageSize::default(),
            range: DateRange::default(),
            filter: ApplicationFilter::default(),
        }
    }
}

impl QueryParams {
    #[must_use]
    pub fn for_range(range: DateRange) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: PageSize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn with_filter(mut self, filter: ApplicationFilter) -> Self {
        self.filter = filter;
        self
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
