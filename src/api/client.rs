use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::query::{Query, QueryParams};
use super::response::{Record, extract_rows, normalize_records};
use crate::error::{DashError, Result};

/// HTTP client abstraction for dependency injection.
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the response body.
    fn get(&self, url: &str) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "could not connect".to_string()
            } else {
                e.to_string()
            };
            DashError::Http {
                url: url.to_string(),
                message,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| DashError::Http {
            url: url.to_string(),
            message: format!("failed to read body: {e}"),
        })
    }
}

/// Typed access to the insights endpoints.
#[derive(Debug)]
pub struct InsightsApi<C: HttpClient = ReqwestClient> {
    base_url: String,
    client: C,
}

impl<C: HttpClient> InsightsApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Raw JSON body of one request.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not JSON.
    pub fn fetch_value(&self, query: Query, params: &QueryParams) -> Result<Value> {
        let url = query.url(&self.base_url, params);
        tracing::debug!(%url, "Fetching");
        let body = self.client.get(&url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// One request deserialized as `T`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not match `T`.
    pub fn fetch<T: DeserializeOwned>(&self, query: Query, params: &QueryParams) -> Result<T> {
        Ok(serde_json::from_value(self.fetch_value(query, params)?)?)
    }

    /// Response rows as untyped records, for tables and CSV export.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not JSON.
    pub fn fetch_records(&self, query: Query, params: &QueryParams) -> Result<Vec<Record>> {
        Ok(normalize_records(self.fetch_value(query, params)?))
    }

    /// Response rows deserialized as `T`, whichever envelope the endpoint uses.
    ///
    /// # Errors
    /// Returns an error if the request fails or any row does not match `T`.
    pub fn fetch_rows<T: DeserializeOwned>(&self, query: Query, params: &QueryParams) -> Result<Vec<T>> {
        extract_rows(self.fetch_value(query, params)?)
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(DashError::from))
            .collect()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
