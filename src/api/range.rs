use std::fmt;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

static ISO_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Optional start/end bounds; an empty string means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl DateRange {
    /// Validate both bounds as `YYYY-MM-DD` calendar dates.
    ///
    /// # Errors
    /// Returns [`DashError::InvalidDateRange`] for a malformed bound or when
    /// `start` is after `end`.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let range = Self {
            start: start.into(),
            end: end.into(),
        };
        let start = parse_bound(&range.start)?;
        let end = parse_bound(&range.end)?;
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(DashError::InvalidDateRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(range)
    }

    /// Both bounds empty.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// From `today - days` through `today`, both inclusive (`days + 1` calendar days).
    #[must_use]
    pub fn trailing_days(days: u64, today: NaiveDate) -> Self {
        let start = today.checked_sub_days(Days::new(days)).unwrap_or(today);
        Self {
            start: start.format("%Y-%m-%d").to_string(),
            end: today.format("%Y-%m-%d").to_string(),
        }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// This range, or the trailing window ending `today` when unbounded.
    #[must_use]
    pub fn or_trailing_days(&self, days: u64, today: NaiveDate) -> Self {
        if self.is_unbounded() {
            Self::trailing_days(days, today)
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            return write!(f, "all time");
        }
        let start = if self.start.is_empty() { "…" } else { &self.start };
        let end = if self.end.is_empty() { "…" } else { &self.end };
        write!(f, "{start} to {end}")
    }
}

fn parse_bound(value: &str) -> Result<Option<NaiveDate>> {
    if value.is_empty() {
        return Ok(None);
    }
    let shape_ok = ISO_DATE.as_ref().is_some_and(|re| re.is_match(value));
    if !shape_ok {
        return Err(DashError::InvalidDateRange(format!(
            "'{value}' is not YYYY-MM-DD"
        )));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DashError::InvalidDateRange(format!("'{value}' is not a calendar date")))
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
