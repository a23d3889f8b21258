use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::api::Record;
use crate::error::{DashError, Result};

/// Render records as quoted CSV, or `None` when there are none.
///
/// The header is the first record's keys in order. Each row takes the
/// header's keys from its record (missing keys are empty). Every field is
/// wrapped in double quotes; embedded quotes are not escaped.
#[must_use]
pub fn to_csv(records: &[Record]) -> Option<String> {
    let first = records.first()?;
    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(quoted_row(headers.iter().map(|h| h.as_str().to_string())));
    for record in records {
        lines.push(quoted_row(
            headers
                .iter()
                .map(|key| record.get(key.as_str()).map_or_else(String::new, cell_text)),
        ));
    }
    Some(lines.join("\n"))
}

/// [`to_csv`] for typed rows.
///
/// # Errors
/// Returns an error if a row does not serialize to a JSON object.
pub fn to_csv_from<T: Serialize>(rows: &[T]) -> Result<Option<String>> {
    let records = rows
        .iter()
        .map(|row| match serde_json::to_value(row)? {
            Value::Object(record) => Ok(record),
            _ => Err(DashError::Config(
                "CSV rows must serialize to objects".to_string(),
            )),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(to_csv(&records))
}

fn quoted_row(fields: impl Iterator<Item = String>) -> String {
    fields
        .map(|field| format!("\"{field}\""))
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes `<subject>.csv` files into a directory.
#[derive(Debug, Clone)]
pub struct CsvExport {
    dir: PathBuf,
}

impl CsvExport {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the records and return the file path, or `Ok(None)` without
    /// touching the filesystem when there are no records.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn write(&self, subject: &str, records: &[Record]) -> Result<Option<PathBuf>> {
        let Some(csv) = to_csv(records) else {
            tracing::info!(subject, "Nothing to export");
            return Ok(None);
        };

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{subject}.csv"));
        fs::write(&path, csv)?;
        tracing::info!(path = %path.display(), rows = records.len(), "Exported CSV");
        Ok(Some(path))
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
