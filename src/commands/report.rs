use std::io::{self, Read};
use std::path::Path;

use chrono::Local;

use super::context::{build_api, load_cli_config, resolve_range};
use crate::api::{DateRange, HttpClient, InsightsApi};
use crate::cli::{Cli, ReportArgs};
use crate::config::Config;
use crate::dashboard::{CATALOGUE, FetchProgress, RefreshTask, Snapshot, render_report, write_report};
use crate::error::Result;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if setup fails or, without `--watch`, the report cannot be written.
pub fn run_report_impl(args: &ReportArgs, cli: &Cli) -> Result<()> {
    let config = load_cli_config(cli)?;
    let range = resolve_range(&args.range)?;
    let api = build_api(&config)?;

    if !args.watch {
        render_once(&api, &config, &range, &args.output, cli.quiet)?;
        return Ok(());
    }

    let interval = config.refresh_interval();
    let output = args.output.clone();
    let quiet = cli.quiet;
    if !quiet {
        eprintln!(
            "Refreshing {} every {}s; close stdin (Ctrl-D) to stop",
            output.display(),
            interval.as_secs()
        );
    }
    let mut task = RefreshTask::spawn(interval, move || {
        if let Err(e) = render_once(&api, &config, &range, &output, quiet) {
            tracing::warn!(error = %e, "Report refresh failed");
        }
    });
    wait_for_eof(io::stdin().lock());
    task.stop();
    Ok(())
}

/// Fetch every card and write the HTML report. Returns the number of failed cards.
///
/// # Errors
/// Returns an error if the report file cannot be written.
pub fn render_once<C: HttpClient>(
    api: &InsightsApi<C>,
    config: &Config,
    range: &DateRange,
    output: &Path,
    quiet: bool,
) -> Result<usize> {
    let now = Local::now();
    let progress = FetchProgress::new(CATALOGUE.len() as u64, quiet);
    let snapshot = Snapshot::collect(api, config, range.clone(), now.date_naive(), &progress);
    let html = render_report(&snapshot, &now.format("%Y-%m-%d %H:%M:%S").to_string());
    write_report(output, &html)?;

    let failed = snapshot.failed_count();
    tracing::info!(path = %output.display(), cards = snapshot.cards.len(), failed, "Wrote report");
    if !quiet {
        eprintln!(
            "Wrote {} ({} cards, {failed} failed)",
            output.display(),
            snapshot.cards.len()
        );
    }
    Ok(failed)
}

/// Block until the reader is exhausted.
fn wait_for_eof(mut reader: impl Read) {
    if let Err(e) = io::copy(&mut reader, &mut io::sink()) {
        tracing::debug!(error = %e, "Stopped waiting for stdin");
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
