//! Payload shapes returned by the insights API.
//!
//! Field names follow the API's camelCase JSON. Counts are non-negative
//! integers on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `total-users`: a single headline number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineStat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// `total-jobs`, `total-tickets`, `total-feeds`: a total with a per-status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub total: u64,
    #[serde(default)]
    pub breakdown: Vec<StatusCount>,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerPolicyStatus {
    pub accepted: u64,
    pub not_accepted: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryRanking {
    #[serde(default)]
    pub data: Vec<CountryCount>,
    #[serde(default)]
    pub total: u64,
}

/// `top-countries`: the same countries ranked by users and by jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCountries {
    pub by_user: CountryRanking,
    pub by_job: CountryRanking,
}

/// One (applicant, role) row. Rows for the same user are expected to be adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopApplicant {
    pub user_id: String,
    pub full_name: String,
    #[serde(default)]
    pub job_role: Option<String>,
    pub role_count: u64,
    pub total_applications: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsByCompany {
    pub company_name: String,
    pub job_count: u64,
    pub total_applications: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTrendRow {
    pub date: String,
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTrendRow {
    pub date: String,
    pub country: String,
    pub count: u64,
}

/// `top-countries-trend`: daily counts for the leading countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTrend {
    pub top_countries: Vec<String>,
    #[serde(default)]
    pub data: Vec<CountryTrendRow>,
}

/// Per-company job counts by status.
///
/// The API sends statuses as ad hoc top-level keys next to `companyName` and
/// `total`; they are collected into `statuses`. Non-numeric extra keys are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawCompanyStatusRow")]
pub struct CompanyStatusRow {
    pub company_name: String,
    pub total: u64,
    pub statuses: BTreeMap<String, u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCompanyStatusRow {
    company_name: String,
    #[serde(default)]
    total: u64,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl From<RawCompanyStatusRow> for CompanyStatusRow {
    fn from(raw: RawCompanyStatusRow) -> Self {
        let statuses = raw
            .extra
            .into_iter()
            .filter_map(|(key, value)| value.as_u64().map(|count| (key, count)))
            .collect();
        Self {
            company_name: raw.company_name,
            total: raw.total,
            statuses,
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
