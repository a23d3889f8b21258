use crate::api::{DateRange, PageSize};
use crate::error::Result;

use super::page::{ApplyOutcome, PageRequest};

/// Anything that can answer a page request.
pub trait PageSource<T> {
    /// # Errors
    /// Returns an error if the page cannot be fetched.
    fn fetch_page(&self, request: &PageRequest) -> Result<Vec<T>>;
}

impl<T, F> PageSource<T> for F
where
    F: Fn(&PageRequest) -> Result<Vec<T>>,
{
    fn fetch_page(&self, request: &PageRequest) -> Result<Vec<T>> {
        self(request)
    }
}

/// Client-side state of a paginated list card.
///
/// Rows accumulate page by page. Only one request is in flight at a time,
/// and changing the date range invalidates every outstanding request.
#[derive(Debug, Clone)]
pub struct ListCard<T> {
    page_size: PageSize,
    compact_len: usize,
    range: DateRange,
    generation: u64,
    /// Last page requested.
    cursor: u32,
    in_flight: Option<PageRequest>,
    rows: Vec<T>,
    expanded: bool,
}

impl<T> ListCard<T> {
    #[must_use]
    pub const fn new(page_size: PageSize, compact_len: usize, range: DateRange) -> Self {
        Self {
            page_size,
            compact_len,
            range,
            generation: 0,
            cursor: 0,
            in_flight: None,
            rows: Vec::new(),
            expanded: false,
        }
    }

    /// Request page 1 for the current range. Any outstanding request becomes stale.
    pub fn begin_initial(&mut self) -> PageRequest {
        self.generation += 1;
        self.cursor = 1;
        let request = self.request_for(1);
        self.in_flight = Some(request.clone());
        request
    }

    /// Request the next page, or `None` while a request is outstanding.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        self.cursor += 1;
        let request = self.request_for(self.cursor);
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Store the rows answering `request`.
    pub fn apply(&mut self, request: &PageRequest, rows: Vec<T>) -> ApplyOutcome {
        if request.generation != self.generation || self.in_flight.as_ref() != Some(request) {
            tracing::debug!(
                page = request.page,
                generation = request.generation,
                current = self.generation,
                "Discarding stale page"
            );
            return ApplyOutcome::Stale;
        }
        self.in_flight = None;

        let count = rows.len();
        if request.page == 1 {
            self.rows = rows;
        } else {
            self.rows.extend(rows);
        }
        ApplyOutcome::Applied { rows: count }
    }

    /// Give up on `request`. The cursor steps back so a retry asks for the same page.
    pub fn fail(&mut self, request: &PageRequest) {
        if self.in_flight.as_ref() != Some(request) {
            return;
        }
        self.in_flight = None;
        if request.page > 1 {
            self.cursor = request.page - 1;
        }
    }

    /// Switch to `range`: rows are discarded and page 1 is requested.
    pub fn set_range(&mut self, range: DateRange) -> PageRequest {
        self.range = range;
        self.rows.clear();
        self.begin_initial()
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// The first rows shown when collapsed.
    #[must_use]
    pub fn compact_rows(&self) -> &[T] {
        &self.rows[..self.rows.len().min(self.compact_len)]
    }

    /// Rows for the current view.
    #[must_use]
    pub fn visible_rows(&self) -> &[T] {
        if self.expanded {
            self.rows()
        } else {
            self.compact_rows()
        }
    }

    #[must_use]
    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.cursor
    }

    /// Fetch and apply page 1 synchronously.
    pub fn load_initial(&mut self, source: &impl PageSource<T>) -> Option<ApplyOutcome> {
        let request = self.begin_initial();
        self.resolve(&request, source)
    }

    /// Fetch and apply the next page synchronously.
    pub fn load_more(&mut self, source: &impl PageSource<T>) -> Option<ApplyOutcome> {
        let request = self.begin_load_more()?;
        self.resolve(&request, source)
    }

    fn resolve(&mut self, request: &PageRequest, source: &impl PageSource<T>) -> Option<ApplyOutcome> {
        match source.fetch_page(request) {
            Ok(rows) => Some(self.apply(request, rows)),
            Err(e) => {
                tracing::warn!(page = request.page, error = %e, "Page fetch failed");
                self.fail(request);
                None
            }
        }
    }

    fn request_for(&self, page: u32) -> PageRequest {
        PageRequest {
            page,
            page_size: self.page_size,
            range: self.range.clone(),
            generation: self.generation,
        }
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
