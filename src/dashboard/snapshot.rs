use chrono::NaiveDate;
use rayon::prelude::*;

use super::cards::{CATALOGUE, CardContext, CardSpec, Section};
use super::progress::FetchProgress;
use crate::api::{DateRange, HttpClient, InsightsApi, Query};
use crate::config::Config;

#[derive(Debug, Clone)]
pub enum CardOutcome {
    Ready(Vec<Section>),
    /// The fetch failed; the message is shown in place of the card.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub query: Query,
    pub outcome: CardOutcome,
}

/// Every dashboard card fetched once for one date range.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub range: DateRange,
    pub cards: Vec<Card>,
}

impl Snapshot {
    /// Fetch the whole catalogue.
    ///
    /// Cards are fetched in parallel and independently; one card failing
    /// leaves the others intact.
    pub fn collect<C: HttpClient>(
        api: &InsightsApi<C>,
        config: &Config,
        range: DateRange,
        today: NaiveDate,
        progress: &FetchProgress,
    ) -> Self {
        Self::collect_cards(CATALOGUE, api, config, range, today, progress)
    }

    pub fn collect_cards<C: HttpClient>(
        specs: &[CardSpec],
        api: &InsightsApi<C>,
        config: &Config,
        range: DateRange,
        today: NaiveDate,
        progress: &FetchProgress,
    ) -> Self {
        let ctx = CardContext {
            api,
            config,
            range: range.clone(),
            today,
        };
        let cards = specs
            .par_iter()
            .map(|spec| {
                let outcome = match spec.build(&ctx) {
                    Ok(sections) => CardOutcome::Ready(sections),
                    Err(e) => {
                        tracing::warn!(card = spec.title, error = %e, "Card fetch failed");
                        CardOutcome::Failed(e.to_string())
                    }
                };
                progress.card_done(spec.title, matches!(outcome, CardOutcome::Failed(_)));
                Card {
                    title: spec.title.to_string(),
                    query: spec.query,
                    outcome,
                }
            })
            .collect();
        progress.finish();
        Self { range, cards }
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| matches!(c.outcome, CardOutcome::Failed(_)))
            .count()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
