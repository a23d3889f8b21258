//! Dashboard snapshots: the card catalogue, parallel fetching, the HTML
//! report and periodic refresh.

mod cards;
mod progress;
mod refresh;
mod report;
mod report_template;
mod snapshot;

pub use cards::{
    CATALOGUE, CardContext, CardKind, CardSpec, CardTable, Section, StatSummary, TREND_WINDOW_DAYS,
};
pub use progress::FetchProgress;
pub use refresh::RefreshTask;
pub use report::{render_report, write_report};
pub use snapshot::{Card, CardOutcome, Snapshot};
