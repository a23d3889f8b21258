//! Shared setup for commands: config loading, date ranges and the API client.

use std::path::Path;

use crate::api::{DateRange, InsightsApi, ReqwestClient};
use crate::cli::{Cli, RangeArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if a config file exists but is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// # Errors
/// Returns an error if the config cannot be loaded.
pub fn load_cli_config(cli: &Cli) -> Result<Config> {
    load_config(cli.config.as_deref(), cli.no_config)
}

/// # Errors
/// Returns an error if either bound is not a valid date or start is after end.
pub fn resolve_range(args: &RangeArgs) -> Result<DateRange> {
    DateRange::new(
        args.start.clone().unwrap_or_default(),
        args.end.clone().unwrap_or_default(),
    )
}

/// # Errors
/// Returns an error if the HTTP client cannot be built.
#[cfg(not(tarpaulin_include))]
pub fn build_api(config: &Config) -> Result<InsightsApi> {
    let client = ReqwestClient::new(config.request_timeout())?;
    Ok(InsightsApi::new(config.api.base_url.clone(), client))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
