//! In-memory [`HttpClient`] for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::HttpClient;
use crate::error::{DashError, Result};

/// Answers each request with the route registered for its endpoint path
/// (the part after `/insights/`); unknown endpoints fail with HTTP 404.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: Vec<(String, std::result::Result<String, u16>)>,
    call_count: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockHttpClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, path: &str, body: &str) -> Self {
        self.routes.push((path.to_string(), Ok(body.to_string())));
        self
    }

    #[must_use]
    pub fn failing(mut self, path: &str, status: u16) -> Self {
        self.routes.push((path.to_string(), Err(status)));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl HttpClient for MockHttpClient {
    fn get(&self, url: &str) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(url.to_string());
        }

        let endpoint = url
            .split_once("/insights/")
            .map_or(url, |(_, rest)| rest.split('?').next().unwrap_or(rest));
        let matched = self.routes.iter().find(|(path, _)| path == endpoint);
        match matched {
            Some((_, Ok(body))) => Ok(body.clone()),
            Some((_, Err(status))) => Err(DashError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(DashError::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
