use crate::api::{DateRange, PageSize, QueryParams};

/// One outstanding page fetch issued by a list card.
///
/// `generation` identifies the card state the request was made for; a
/// response whose generation is no longer current is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: PageSize,
    pub range: DateRange,
    pub generation: u64,
}

impl PageRequest {
    /// Query parameters for this page.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams::for_range(self.range.clone())
            .with_page(self.page)
            .with_limit(self.page_size)
    }
}

/// What happened to a page response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Rows were stored; page 1 replaces, later pages append.
    Applied { rows: usize },
    /// The response belongs to an older request and was dropped.
    Stale,
}
