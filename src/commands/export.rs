use super::context::{build_api, load_cli_config, resolve_range};
use crate::api::{HttpClient, InsightsApi, PageSize, Query, QueryParams};
use crate::cli::{Cli, ExportArgs};
use crate::error::Result;
use crate::listing::CsvExport;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    match run_export_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the range is invalid, the fetch fails or the file cannot be written.
pub fn run_export_impl(args: &ExportArgs, cli: &Cli) -> Result<()> {
    let config = load_cli_config(cli)?;
    let params = QueryParams::for_range(resolve_range(&args.range)?)
        .with_limit(PageSize::All)
        .with_filter(args.filter.into());
    let api = build_api(&config)?;
    let export = CsvExport::new(&args.out_dir);

    match export_query(&api, args.query, &params, &export)? {
        Some(path) if !cli.quiet => println!("Exported {}", path.display()),
        Some(_) => {}
        None if !cli.quiet => println!("No rows to export for {}", args.query),
        None => {}
    }
    Ok(())
}

/// Fetch every row of `query` in one request and write `<subject>.csv`.
///
/// Returns `Ok(None)` when the query has no rows.
///
/// # Errors
/// Returns an error if the fetch fails or the file cannot be written.
pub fn export_query<C: HttpClient>(
    api: &InsightsApi<C>,
    query: Query,
    params: &QueryParams,
    export: &CsvExport,
) -> Result<Option<std::path::PathBuf>> {
    if !query.is_paginated() {
        tracing::info!(%query, "Exporting a non-list query; rows are taken from the response as-is");
    }
    let records = api.fetch_records(query, params)?;
    export.write(&query.subject(), &records)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
