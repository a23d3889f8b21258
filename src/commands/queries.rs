use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::api::{Pagination, Query};

#[must_use]
pub fn run_queries() -> i32 {
    print!("{}", format_queries());
    EXIT_SUCCESS
}

/// One line per query: path, CSV subject and how it pages.
#[must_use]
pub fn format_queries() -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{:<28} {:<28} PAGING", "QUERY", "CSV SUBJECT");
    for query in Query::ALL {
        let paging = match query.pagination() {
            Pagination::Paged => "page+limit",
            Pagination::LimitOnly => "limit",
            Pagination::None => "-",
        };
        let _ = writeln!(output, "{:<28} {:<28} {paging}", query.path(), query.subject());
    }
    output
}

#[cfg(test)]
#[path = "queries_tests.rs"]
mod tests;
