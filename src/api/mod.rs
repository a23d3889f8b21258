//! Fetch layer for the insights HTTP API.
//!
//! The aggregation core never calls this module; it only sees deserialized
//! payloads. The CLI uses it for exports and dashboard snapshots.

mod client;
#[cfg(test)]
pub(crate) mod mock;
mod query;
mod range;
mod response;

pub use client::{HttpClient, InsightsApi, ReqwestClient};
pub use query::{ApplicationFilter, PageSize, Pagination, Query, QueryParams};
pub use range::DateRange;
pub use response::{Record, extract_rows, normalize_records};
