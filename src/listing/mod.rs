//! Paginated list cards and CSV export.

mod card;
mod csv;
mod page;

pub use card::{ListCard, PageSource};
pub use csv::{CsvExport, to_csv, to_csv_from};
pub(crate) use csv::cell_text;
pub use page::{ApplyOutcome, PageRequest};
