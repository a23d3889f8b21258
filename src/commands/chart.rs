use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::context::load_cli_config;
use crate::chart::{
    CategoryGroup, ChartGeometry, DataPoint, PieConfig, PieSlice, Series, SimpleBarConfig,
    SvgElement, grouped_bar, line_chart, pie_chart, simple_bar, stacked_bar,
};
use crate::cli::{ChartArgs, ChartKind, Cli};
use crate::config::Config;
use crate::error::{DashError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_chart(args: &ChartArgs, cli: &Cli) -> i32 {
    match run_chart_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the input cannot be read or does not match the chart kind.
pub fn run_chart_impl(args: &ChartArgs, cli: &Cli) -> Result<()> {
    let config = load_cli_config(cli)?;
    let input = fs::read_to_string(&args.input).map_err(|source| DashError::FileRead {
        path: args.input.clone(),
        source,
    })?;
    let geometry = render_chart(args.kind, &args.title, &input, &config)?;
    let svg = geometry.render();

    match &args.output {
        Some(path) => {
            write_output(path, &svg)?;
            if !cli.quiet {
                eprintln!("Wrote {} chart to {}", args.kind, path.display());
            }
        }
        None => println!("{svg}"),
    }
    Ok(())
}

/// Parse `input` as the data shape `kind` expects and lay it out.
///
/// # Errors
/// Returns an error if `input` is not JSON of the expected shape.
pub fn render_chart(kind: ChartKind, title: &str, input: &str, config: &Config) -> Result<ChartGeometry> {
    let geometry = match kind {
        ChartKind::Bar => simple_bar(title, &parse::<Vec<DataPoint>>(input)?, &SimpleBarConfig::default()),
        ChartKind::Grouped => grouped_bar(title, &parse::<Vec<CategoryGroup>>(input)?, &config.category_chart()),
        ChartKind::Stacked => stacked_bar(title, &parse::<Vec<CategoryGroup>>(input)?, &config.category_chart()),
        ChartKind::Line => line_chart(title, &parse::<Vec<Series>>(input)?, &config.line_chart()),
        ChartKind::Pie => pie_chart(title, &parse::<Vec<PieSlice>>(input)?, &PieConfig::pie()),
        ChartKind::Donut => pie_chart(title, &parse::<Vec<PieSlice>>(input)?, &PieConfig::donut()),
    };
    tracing::info!(%kind, shapes = geometry.shapes.len(), "Rendered chart");
    Ok(geometry)
}

fn parse<T: DeserializeOwned>(input: &str) -> Result<T> {
    Ok(serde_json::from_str(input)?)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
