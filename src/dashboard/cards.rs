//! The dashboard's card catalogue: what each card fetches and how it is drawn.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::{
    ApplicationFilter, DateRange, HttpClient, InsightsApi, PageSize, Query, QueryParams, Record,
};
use crate::chart::{
    CategoryChartConfig, CategoryGroup, ChartColor, ChartGeometry, ColorMap, PieConfig, PieSlice,
    Segment, Series, SimpleBarConfig, assign_colors, default_palette, grouped_bar, humanize_key,
    line_chart, pie_chart, simple_bar, stacked_bar,
};
use crate::config::Config;
use crate::error::Result;
use crate::listing::{ListCard, PageRequest, cell_text};
use crate::models::{
    CompanyStatusRow, CountryTrend, EmployerPolicyStatus, HeadlineStat, JobsByCompany,
    StatusBreakdown, StatusCount, StatusTrendRow, TopApplicant, TopCountries,
};
use crate::transform::{
    CompanyStatusTable, JOB_COUNT_KEY, JOBS_KEY, TOTAL_APPS_KEY, USERS_KEY, company_comparison,
    country_comparison, country_trend_totals, group_by_key, is_grouped_contiguously,
    status_trend_groups,
};

/// Trend cards default to this many trailing days when no range is set.
pub const TREND_WINDOW_DAYS: u64 = 7;

const ACCEPTED_COLOR: &str = "#1e8e3e";
const NOT_ACCEPTED_COLOR: &str = "#d93025";
const COUNTRY_TREND_COLOR: &str = "#8b5cf6";
const COMPANY_COMPARISON_GROUP_WIDTH: f64 = 200.0;
const JOBS_BY_COMPANY_COMPACT_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Headline,
    Breakdown,
    /// Line chart; the color overrides the first series.
    Trend(Option<&'static str>),
    EmployerPolicy,
    StatusDistribution,
    StatusTrend,
    CountryComparison,
    CompanyComparison,
    CompanyStatus,
    CountryTrend,
    TopApplicants,
    List,
    ApplicationList(ApplicationFilter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub query: Query,
    pub kind: CardKind,
}

const fn card(title: &'static str, query: Query, kind: CardKind) -> CardSpec {
    CardSpec { title, query, kind }
}

/// Every card on the dashboard, in layout order.
pub const CATALOGUE: &[CardSpec] = &[
    card("Total Users", Query::TotalUsers, CardKind::Headline),
    card("Users Trend", Query::TotalUsersTrend, CardKind::Trend(Some("#3b82f6"))),
    card("Total Jobs", Query::TotalJobs, CardKind::Breakdown),
    card("Jobs Trend", Query::TotalJobsTrend, CardKind::Trend(Some("#10b981"))),
    card("Total Tickets", Query::TotalTickets, CardKind::Breakdown),
    card("Tickets Trend", Query::TotalTicketsTrend, CardKind::Trend(Some("#f59e0b"))),
    card("Total Feeds", Query::TotalFeeds, CardKind::Breakdown),
    card("Feeds Trend", Query::TotalFeedsTrend, CardKind::Trend(Some("#8b5cf6"))),
    card("Employer Policy Status", Query::EmployerPolicyStatus, CardKind::EmployerPolicy),
    card("Employer Policy Trend", Query::EmployerPolicyTrend, CardKind::Trend(None)),
    card("Application Status", Query::ApplicationStatus, CardKind::StatusDistribution),
    card("Application Status Trend", Query::ApplicationStatusTrend, CardKind::StatusTrend),
    card("Top Applicants", Query::TopApplicants, CardKind::TopApplicants),
    card("Top Job Roles", Query::TopJobRoles, CardKind::List),
    card("Top Target Roles", Query::TopTargetRoles, CardKind::List),
    card("Top Applicants Summary", Query::TopApplicantsSummary, CardKind::List),
    card(
        "Users Who Applied",
        Query::UsersApplicationStatus,
        CardKind::ApplicationList(ApplicationFilter::Applied),
    ),
    card(
        "Users Who Have Not Applied",
        Query::UsersApplicationStatus,
        CardKind::ApplicationList(ApplicationFilter::NotApplied),
    ),
    card("Jobs by Company", Query::JobsByCompany, CardKind::List),
    card("Jobs vs Applications by Company", Query::JobsByCompany, CardKind::CompanyComparison),
    card("Company Popularity", Query::CompanyPopularity, CardKind::List),
    card("Job Status", Query::JobStatusList, CardKind::List),
    card("Company Status Counts", Query::CompanyStatusCounts, CardKind::CompanyStatus),
    card("Top Countries", Query::TopCountries, CardKind::CountryComparison),
    card("Top Countries Trend", Query::TopCountriesTrend, CardKind::CountryTrend),
    card("User Feed Engagement", Query::UserFeedEngagement, CardKind::List),
    card("Top Communities", Query::TopCommunities, CardKind::List),
    card("Top Communities Trend", Query::TopCommunitiesTrend, CardKind::Trend(None)),
    card("Incomplete Profiles", Query::IncompleteProfiles, CardKind::List),
];

/// A headline number with its optional per-status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSummary {
    pub value: u64,
    pub breakdown: Vec<StatusCount>,
    pub updated_at: String,
}

/// Table cells ready for display; `total_rows` counts rows loaded but not shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

impl CardTable {
    #[must_use]
    pub fn hidden_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.rows.len())
    }
}

#[derive(Debug, Clone)]
pub enum Section {
    Stat(StatSummary),
    Chart(ChartGeometry),
    Table(CardTable),
}

/// Everything a card needs to fetch and lay itself out.
pub struct CardContext<'a, C: HttpClient> {
    pub api: &'a InsightsApi<C>,
    pub config: &'a Config,
    pub range: DateRange,
    pub today: NaiveDate,
}

impl<C: HttpClient> CardContext<'_, C> {
    fn params(&self) -> QueryParams {
        QueryParams::for_range(self.range.clone())
    }

    fn category_config(&self) -> CategoryChartConfig {
        self.config.category_chart()
    }

    fn list_card<T>(&self, compact_rows: usize) -> ListCard<T> {
        ListCard::new(self.config.page_size(), compact_rows, self.range.clone())
    }
}

impl CardSpec {
    /// Fetch the card's data and lay it out.
    ///
    /// # Errors
    /// Returns an error if the fetch fails or the payload has the wrong shape.
    pub fn build<C: HttpClient>(&self, ctx: &CardContext<'_, C>) -> Result<Vec<Section>> {
        match self.kind {
            CardKind::Headline => headline(ctx, self.query),
            CardKind::Breakdown => breakdown(ctx, self.query),
            CardKind::Trend(color) => trend(ctx, self, color),
            CardKind::EmployerPolicy => employer_policy(ctx, self),
            CardKind::StatusDistribution => status_distribution(ctx, self),
            CardKind::StatusTrend => status_trend(ctx, self),
            CardKind::CountryComparison => countries(ctx, self),
            CardKind::CompanyComparison => companies(ctx, self),
            CardKind::CompanyStatus => company_status(ctx, self.query),
            CardKind::CountryTrend => country_trend(ctx, self),
            CardKind::TopApplicants => top_applicants(ctx, self.query),
            CardKind::List => list(ctx, self.query, ApplicationFilter::All),
            CardKind::ApplicationList(filter) => list(ctx, self.query, filter),
        }
    }
}

fn headline<C: HttpClient>(ctx: &CardContext<'_, C>, query: Query) -> Result<Vec<Section>> {
    let stat: HeadlineStat = ctx.api.fetch(query, &ctx.params())?;
    Ok(vec![Section::Stat(StatSummary {
        value: stat.value,
        breakdown: Vec::new(),
        updated_at: stat.updated_at,
    })])
}

fn breakdown<C: HttpClient>(ctx: &CardContext<'_, C>, query: Query) -> Result<Vec<Section>> {
    let stat: StatusBreakdown = ctx.api.fetch(query, &ctx.params())?;
    Ok(vec![Section::Stat(StatSummary {
        value: stat.total,
        breakdown: stat.breakdown,
        updated_at: stat.updated_at,
    })])
}

fn trend<C: HttpClient>(
    ctx: &CardContext<'_, C>,
    spec: &CardSpec,
    color: Option<&str>,
) -> Result<Vec<Section>> {
    let range = ctx.range.or_trailing_days(TREND_WINDOW_DAYS, ctx.today);
    let mut series: Vec<Series> = ctx.api.fetch(spec.query, &QueryParams::for_range(range))?;
    if let (Some(color), Some(first)) = (color, series.first_mut()) {
        first.color = color.to_string();
    }
    Ok(vec![Section::Chart(line_chart(
        spec.title,
        &series,
        &ctx.config.line_chart(),
    ))])
}

fn employer_policy<C: HttpClient>(ctx: &CardContext<'_, C>, spec: &CardSpec) -> Result<Vec<Section>> {
    let status: EmployerPolicyStatus = ctx.api.fetch(spec.query, &ctx.params())?;
    let slices = [
        PieSlice::new("Accepted", as_value(status.accepted), ChartColor::hex(ACCEPTED_COLOR)),
        PieSlice::new(
            "Not Accepted",
            as_value(status.not_accepted),
            ChartColor::hex(NOT_ACCEPTED_COLOR),
        ),
    ];
    Ok(vec![Section::Chart(pie_chart(spec.title, &slices, &PieConfig::pie()))])
}

fn status_distribution<C: HttpClient>(
    ctx: &CardContext<'_, C>,
    spec: &CardSpec,
) -> Result<Vec<Section>> {
    let counts: Vec<StatusCount> = ctx.api.fetch_rows(spec.query, &ctx.params())?;
    let colors = assign_colors(
        counts.iter().map(|c| c.status.as_str()),
        &ctx.config.predefined_colors(),
        &default_palette(),
    );
    let slices: Vec<PieSlice> = counts
        .iter()
        .map(|c| {
            let color = colors.get(&c.status).cloned().unwrap_or_else(ChartColor::neutral);
            PieSlice::new(humanize_key(&c.status), as_value(c.count), color)
        })
        .collect();
    Ok(vec![Section::Chart(pie_chart(spec.title, &slices, &PieConfig::donut()))])
}

fn status_trend<C: HttpClient>(ctx: &CardContext<'_, C>, spec: &CardSpec) -> Result<Vec<Section>> {
    let range = ctx.range.or_trailing_days(TREND_WINDOW_DAYS, ctx.today);
    let rows: Vec<StatusTrendRow> = ctx.api.fetch_rows(spec.query, &QueryParams::for_range(range))?;
    let (groups, _statuses) = status_trend_groups(&rows);
    Ok(vec![Section::Chart(grouped_bar(
        spec.title,
        &groups,
        &ctx.category_config(),
    ))])
}

fn countries<C: HttpClient>(ctx: &CardContext<'_, C>, spec: &CardSpec) -> Result<Vec<Section>> {
    let params = ctx.params().with_limit(PageSize::All);
    let top: TopCountries = ctx.api.fetch(spec.query, &params)?;
    let groups = country_comparison(&top.by_user, &top.by_job);
    let config = ctx
        .category_config()
        .with_colors(comparison_colors(ctx.config, USERS_KEY, JOBS_KEY));
    Ok(vec![Section::Chart(grouped_bar(spec.title, &groups, &config))])
}

fn companies<C: HttpClient>(ctx: &CardContext<'_, C>, spec: &CardSpec) -> Result<Vec<Section>> {
    let params = ctx.params().with_limit(PageSize::All);
    let rows: Vec<JobsByCompany> = ctx.api.fetch_rows(spec.query, &params)?;
    let groups = company_comparison(&rows);
    let config = ctx
        .category_config()
        .with_min_group_width(COMPANY_COMPARISON_GROUP_WIDTH)
        .with_colors(comparison_colors(ctx.config, JOB_COUNT_KEY, TOTAL_APPS_KEY));
    Ok(vec![Section::Chart(grouped_bar(spec.title, &groups, &config))])
}

/// Blue then green for a two-series comparison, unless configured otherwise.
fn comparison_colors(config: &Config, first: &str, second: &str) -> ColorMap {
    let mut colors = config.predefined_colors();
    colors
        .entry(first.to_string())
        .or_insert_with(|| ChartColor::hex("#3b82f6"));
    colors
        .entry(second.to_string())
        .or_insert_with(|| ChartColor::hex("#10b981"));
    colors
}

fn company_status<C: HttpClient>(ctx: &CardContext<'_, C>, query: Query) -> Result<Vec<Section>> {
    let mut card = ctx.list_card::<CompanyStatusRow>(ctx.config.listing.compact_rows);
    card.load_initial(&|request: &PageRequest| ctx.api.fetch_rows(query, &request.params()));

    let table = CompanyStatusTable::from_rows(card.compact_rows().to_vec());
    let groups: Vec<_> = table
        .rows
        .iter()
        .map(|row| {
            CategoryGroup::new(
                row.company_name.clone(),
                table
                    .statuses
                    .iter()
                    .map(|s| Segment::new(s.clone(), as_value(table.cell(row, s))))
                    .collect(),
            )
        })
        .collect();
    let chart = stacked_bar("Jobs by Status", &groups, &ctx.category_config());

    let (headers, rows) = table.to_grid();
    Ok(vec![
        Section::Chart(chart),
        Section::Table(CardTable {
            headers,
            rows,
            total_rows: card.rows().len(),
        }),
    ])
}

fn country_trend<C: HttpClient>(ctx: &CardContext<'_, C>, spec: &CardSpec) -> Result<Vec<Section>> {
    let trend: CountryTrend = ctx.api.fetch(spec.query, &ctx.params())?;
    let totals = country_trend_totals(&trend);
    let config = SimpleBarConfig::default().with_color(ChartColor::hex(COUNTRY_TREND_COLOR));
    Ok(vec![Section::Chart(simple_bar(spec.title, &totals, &config))])
}

/// One row per (applicant, role); the name is shown only on an applicant's first row.
fn top_applicants<C: HttpClient>(ctx: &CardContext<'_, C>, query: Query) -> Result<Vec<Section>> {
    let mut card = ctx.list_card::<TopApplicant>(ctx.config.listing.compact_rows);
    card.load_initial(&|request: &PageRequest| ctx.api.fetch_rows(query, &request.params()));

    if !is_grouped_contiguously(card.rows(), |a| a.user_id.as_str()) {
        tracing::debug!("Top applicants arrived interleaved; regrouping by user");
    }
    let mut rows = Vec::new();
    for group in group_by_key(card.compact_rows(), |a| a.user_id.as_str()) {
        for (i, applicant) in group.rows.iter().enumerate() {
            let name = if i == 0 {
                applicant.full_name.clone()
            } else {
                String::new()
            };
            rows.push(vec![
                name,
                applicant.job_role.clone().unwrap_or_default(),
                applicant.role_count.to_string(),
                applicant.total_applications.to_string(),
            ]);
        }
    }
    let headers = ["Name", "Job Role", "Role Count", "Total Applications"]
        .map(String::from)
        .to_vec();
    Ok(vec![Section::Table(CardTable {
        headers,
        rows,
        total_rows: card.rows().len(),
    })])
}

fn list<C: HttpClient>(
    ctx: &CardContext<'_, C>,
    query: Query,
    filter: ApplicationFilter,
) -> Result<Vec<Section>> {
    let compact = if query == Query::JobsByCompany {
        JOBS_BY_COMPANY_COMPACT_ROWS
    } else {
        ctx.config.listing.compact_rows
    };
    let mut card = ctx.list_card::<Record>(compact);
    card.load_initial(&|request: &PageRequest| {
        ctx.api
            .fetch_records(query, &request.params().with_filter(filter))
    });
    Ok(vec![Section::Table(records_table(card.compact_rows(), card.rows().len()))])
}

fn records_table(records: &[Record], total_rows: usize) -> CardTable {
    let Some(first) = records.first() else {
        return CardTable::default();
    };
    let keys: Vec<&String> = first.keys().collect();
    CardTable {
        headers: keys.iter().map(|k| humanize_key(k)).collect(),
        rows: records
            .iter()
            .map(|record| {
                keys.iter()
                    .map(|k| record.get(k.as_str()).map_or_else(String::new, cell_text))
                    .collect()
            })
            .collect(),
        total_rows,
    }
}

#[allow(clippy::cast_precision_loss)]
const fn as_value(count: u64) -> f64 {
    count as f64
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod tests;
