use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::{ApplicationFilter, Query};
use crate::error::DashError;

/// Chart renderer selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Grouped,
    Stacked,
    Line,
    Pie,
    Donut,
}

impl ChartKind {
    pub const ALL: [Self; 6] = [
        Self::Bar,
        Self::Grouped,
        Self::Stacked,
        Self::Line,
        Self::Pie,
        Self::Donut,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Grouped => "grouped",
            Self::Stacked => "stacked",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Donut => "donut",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashError::UnknownChartKind(s.to_string()))
    }
}

/// Application filter for `users-application-status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterChoice {
    /// Users with at least one application
    Applied,
    /// Users with no applications
    #[value(name = "not_applied")]
    NotApplied,
    /// No filter
    #[default]
    All,
}

impl From<FilterChoice> for ApplicationFilter {
    fn from(choice: FilterChoice) -> Self {
        match choice {
            FilterChoice::Applied => Self::Applied,
            FilterChoice::NotApplied => Self::NotApplied,
            FilterChoice::All => Self::All,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "insights-dash")]
#[command(author, version, about = "Recruiting insights charts, snapshots and CSV exports")]
#[command(long_about = "Render dashboard charts, snapshot the insights API to HTML and export \
    list cards as CSV.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a chart from a JSON data file to SVG
    Chart(ChartArgs),

    /// Fetch every row of a list query and write it as CSV
    Export(ExportArgs),

    /// Snapshot every dashboard card into an HTML report
    Report(ReportArgs),

    /// List the available queries
    Queries,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// Chart type [possible values: bar, grouped, stacked, line, pie, donut]
    pub kind: ChartKind,

    /// JSON file with the chart data
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write SVG to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart title
    #[arg(short, long, default_value = "Chart")]
    pub title: String,
}

/// Date range bounds shared by API-backed commands.
#[derive(Parser, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Query to export (e.g. top-applicants or top_applicants)
    pub query: Query,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Application filter (users-application-status only)
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterChoice,

    /// Directory for the CSV file
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Output HTML file
    #[arg(short, long, default_value = "dashboard.html")]
    pub output: PathBuf,

    /// Re-render every refresh interval until stdin closes
    #[arg(short, long)]
    pub watch: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".insights-dash.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
