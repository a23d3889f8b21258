pub mod chart;
pub mod context;
pub mod export;
pub mod init;
pub mod queries;
pub mod report;

pub use chart::{render_chart, run_chart};
pub use context::{load_config, resolve_range};
pub use export::{export_query, run_export};
pub use init::{generate_config_template, run_init};
pub use queries::{format_queries, run_queries};
pub use report::{render_once, run_report};
