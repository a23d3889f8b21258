//! Range checks that TOML parsing alone cannot express.

use crate::config::Config;
use crate::error::{DashError, Result};

/// # Errors
/// Returns an error naming the first field that is out of range.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_api_section(config)?;
    validate_listing_section(config)?;
    if config.refresh.interval_secs == 0 {
        return Err(DashError::Config(
            "refresh.interval_secs must be greater than 0".to_string(),
        ));
    }
    validate_charts_section(config)
}

fn validate_api_section(config: &Config) -> Result<()> {
    let base_url = &config.api.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(DashError::Config(format!(
            "api.base_url must start with http:// or https://, got '{base_url}'"
        )));
    }
    if config.api.timeout_secs == 0 {
        return Err(DashError::Config(
            "api.timeout_secs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_listing_section(config: &Config) -> Result<()> {
    if config.listing.page_size == 0 {
        return Err(DashError::Config(
            "listing.page_size must be greater than 0".to_string(),
        ));
    }
    if config.listing.compact_rows == 0 {
        return Err(DashError::Config(
            "listing.compact_rows must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_charts_section(config: &Config) -> Result<()> {
    let charts = &config.charts;
    if !charts.headroom.is_finite() || charts.headroom < 1.0 {
        return Err(DashError::Config(format!(
            "charts.headroom must be at least 1.0, got {}",
            charts.headroom
        )));
    }
    let sizes = [
        ("line_width", charts.line_width),
        ("line_height", charts.line_height),
        ("bar_height", charts.bar_height),
        ("bar_min_width", charts.bar_min_width),
        ("min_group_width", charts.min_group_width),
    ];
    for (name, value) in sizes {
        if !value.is_finite() || value <= 0.0 {
            return Err(DashError::Config(format!(
                "charts.{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
