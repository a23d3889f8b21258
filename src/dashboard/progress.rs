//! Card-fetch progress on stderr.

use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} Fetching [{bar:30.cyan/blue}] {pos}/{len} cards {msg}";

/// Tracks how many dashboard cards have resolved and how many failed.
///
/// The bar shows the title of the card that finished last. It is hidden in
/// quiet mode or when stderr is not a TTY, but the counts are kept either way.
#[derive(Clone)]
pub struct FetchProgress {
    progress_bar: ProgressBar,
    done: Arc<AtomicU64>,
    failed: Arc<AtomicU64>,
}

impl FetchProgress {
    #[must_use]
    pub fn new(cards: u64, quiet: bool) -> Self {
        Self::with_visibility(cards, !quiet && std::io::stderr().is_terminal())
    }

    fn with_visibility(cards: u64, visible: bool) -> Self {
        let progress_bar = if visible {
            let pb = ProgressBar::new(cards);
            match ProgressStyle::default_bar().template(TEMPLATE) {
                Ok(style) => pb.set_style(style.progress_chars("█▓░")),
                Err(e) => tracing::debug!(error = %e, "Falling back to default progress style"),
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            done: Arc::new(AtomicU64::new(0)),
            failed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record one resolved card. Safe to call from rayon workers.
    pub fn card_done(&self, title: &str, failed: bool) {
        if failed {
            self.failed.fetch_add(1, Ordering::Relaxed);
            self.progress_bar.set_message(format!("{title} (failed)"));
        } else {
            self.progress_bar.set_message(title.to_string());
        }
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(done);
    }

    #[must_use]
    pub fn done(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
