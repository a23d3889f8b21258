use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid page size: {0} (expected a positive integer or 'all')")]
    InvalidPageSize(String),

    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    #[error("Unknown chart kind: {0}")]
    UnknownChartKind(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
