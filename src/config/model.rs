use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::PageSize;
use crate::chart::{
    CategoryChartConfig, ChartColor, ColorMap, DEFAULT_HEADROOM, LineChartConfig, status_colors,
};

/// Root of `.insights-dash.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub listing: ListingConfig,
    pub refresh: RefreshConfig,
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix before `/insights/<endpoint>`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Rows per page for list cards.
    pub page_size: u32,
    /// Rows shown while a card is collapsed.
    pub compact_rows: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            compact_rows: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub line_width: f64,
    pub line_height: f64,
    pub bar_height: f64,
    pub bar_min_width: f64,
    pub min_group_width: f64,
    pub headroom: f64,
    /// Series key to CSS color, layered over the built-in status colors.
    pub colors: IndexMap<String, String>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            line_width: 500.0,
            line_height: 300.0,
            bar_height: 300.0,
            bar_min_width: 800.0,
            min_group_width: 100.0,
            headroom: DEFAULT_HEADROOM,
            colors: IndexMap::new(),
        }
    }
}

impl Config {
    /// Zero falls back to the default page size.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::count(self.listing.page_size).unwrap_or_default()
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Status colors with the user's overrides applied.
    #[must_use]
    pub fn predefined_colors(&self) -> ColorMap {
        let mut colors = status_colors();
        for (key, css) in &self.charts.colors {
            colors.insert(key.clone(), ChartColor::from(css.as_str()));
        }
        colors
    }

    #[must_use]
    pub fn line_chart(&self) -> LineChartConfig {
        LineChartConfig::default()
            .with_size(self.charts.line_width, self.charts.line_height)
            .with_headroom(self.charts.headroom)
    }

    #[must_use]
    pub fn category_chart(&self) -> CategoryChartConfig {
        CategoryChartConfig {
            height: self.charts.bar_height,
            min_width: self.charts.bar_min_width,
            ..CategoryChartConfig::default()
        }
        .with_min_group_width(self.charts.min_group_width)
        .with_headroom(self.charts.headroom)
        .with_colors(self.predefined_colors())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
