use std::fs;

use crate::cli::InitArgs;
use crate::{DashError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DashError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# insights-dash configuration file

[api]
# Base URL of the insights API (requests go to <base_url>/insights/<query>)
base_url = "http://localhost:4000/api"
# Request timeout in seconds
timeout_secs = 30

[listing]
# Rows fetched per page by list cards
page_size = 10
# Rows shown while a card is collapsed
compact_rows = 5

[refresh]
# Seconds between refreshes in `report --watch`
interval_secs = 60

[charts]
line_width = 500
line_height = 300
bar_height = 300
bar_min_width = 800
min_group_width = 100
# Multiplier applied to the largest value to leave room above bars and lines
headroom = 1.1

# Override series colors by key (hex or var(--color-name))
[charts.colors]
# HIRED = "#10b981"
# Users = "var(--color-users)"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
