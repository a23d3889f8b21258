use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::CompanyStatusRow;

/// Companies by status, with one column per status seen in any row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyStatusTable {
    /// Sorted union of status names.
    pub statuses: Vec<String>,
    pub rows: Vec<CompanyStatusRow>,
}

impl CompanyStatusTable {
    #[must_use]
    pub fn from_rows(rows: Vec<CompanyStatusRow>) -> Self {
        let statuses: BTreeSet<&String> = rows.iter().flat_map(|r| r.statuses.keys()).collect();
        Self {
            statuses: statuses.into_iter().cloned().collect(),
            rows,
        }
    }

    /// Count for one cell; a status the company never reported reads 0.
    #[must_use]
    pub fn cell(&self, row: &CompanyStatusRow, status: &str) -> u64 {
        row.statuses.get(status).copied().unwrap_or(0)
    }

    /// Header row followed by one row per company, counts as strings.
    #[must_use]
    pub fn to_grid(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers = vec!["Company".to_string()];
        headers.extend(self.statuses.iter().cloned());
        headers.push("Total".to_string());

        let body = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.company_name.clone()];
                cells.extend(self.statuses.iter().map(|s| self.cell(row, s).to_string()));
                cells.push(row.total.to_string());
                cells
            })
            .collect();
        (headers, body)
    }
}

#[cfg(test)]
#[path = "company_table_tests.rs"]
mod tests;
