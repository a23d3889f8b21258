use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::cards::{CardTable, Section, StatSummary};
use super::report_template::{HTML_FOOTER, HTML_HEADER};
use super::snapshot::{Card, CardOutcome, Snapshot};
use crate::chart::{ChartGeometry, SvgElement, format_number, format_value, html_escape, humanize_key};
use crate::error::Result;

/// Render a snapshot as a self-contained HTML page.
#[must_use]
pub fn render_report(snapshot: &Snapshot, generated_at: &str) -> String {
    let mut output = String::from(HTML_HEADER);
    let _ = writeln!(
        output,
        r#"        <div class="range">Date range: {} &middot; generated {}</div>"#,
        html_escape(&snapshot.range.to_string()),
        html_escape(generated_at)
    );
    output.push_str("        <div class=\"card-grid\">\n");
    for card in &snapshot.cards {
        write_card(&mut output, card);
    }
    output.push_str("        </div>\n");
    output.push_str(HTML_FOOTER);
    output
}

/// Write the report, creating parent directories as needed.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}

fn write_card(output: &mut String, card: &Card) {
    let class = match card.outcome {
        CardOutcome::Ready(_) => "card",
        CardOutcome::Failed(_) => "card failed",
    };
    let _ = writeln!(
        output,
        r#"            <div class="{class}" data-query="{}">"#,
        card.query.path()
    );
    let _ = writeln!(output, "                <h3>{}</h3>", html_escape(&card.title));
    match &card.outcome {
        CardOutcome::Ready(sections) => {
            for section in sections {
                match section {
                    Section::Stat(stat) => write_stat(output, stat),
                    Section::Chart(chart) => write_chart(output, chart),
                    Section::Table(table) => write_table(output, table),
                }
            }
        }
        CardOutcome::Failed(message) => {
            let _ = writeln!(
                output,
                r#"                <div class="error">Failed to load: {}</div>"#,
                html_escape(message)
            );
        }
    }
    output.push_str("            </div>\n");
}

fn write_stat(output: &mut String, stat: &StatSummary) {
    output.push_str("                <div class=\"stat\">\n");
    let _ = writeln!(
        output,
        r#"                    <span class="value" title="{}">{}</span>"#,
        stat.value,
        format_number(i64::try_from(stat.value).unwrap_or(i64::MAX))
    );
    if !stat.updated_at.is_empty() {
        let _ = writeln!(
            output,
            r#"                    <span class="updated">Updated {}</span>"#,
            html_escape(&stat.updated_at)
        );
    }
    if !stat.breakdown.is_empty() {
        output.push_str("                    <ul>\n");
        for entry in &stat.breakdown {
            let _ = writeln!(
                output,
                "                        <li><span>{}</span><strong>{}</strong></li>",
                html_escape(&humanize_key(&entry.status)),
                entry.count
            );
        }
        output.push_str("                    </ul>\n");
    }
    output.push_str("                </div>\n");
}

fn write_chart(output: &mut String, chart: &ChartGeometry) {
    for line in chart.render().lines() {
        let _ = writeln!(output, "                {line}");
    }
    if chart.legend.is_empty() {
        return;
    }
    output.push_str("                <div class=\"legend\">\n");
    for entry in &chart.legend {
        let value = entry
            .value
            .map(|v| format!(" ({})", format_value(v)))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            r#"                    <span><span class="swatch" style="background: {}"></span>{}{value}</span>"#,
            entry.color.to_css(),
            html_escape(&entry.label)
        );
    }
    output.push_str("                </div>\n");
}

fn write_table(output: &mut String, table: &CardTable) {
    if table.rows.is_empty() {
        output.push_str("                <div class=\"no-results\">No data available</div>\n");
        return;
    }
    output.push_str("                <table>\n                    <thead><tr>");
    for header in &table.headers {
        let _ = write!(output, "<th>{}</th>", html_escape(header));
    }
    output.push_str("</tr></thead>\n                    <tbody>\n");
    for row in &table.rows {
        output.push_str("                        <tr>");
        for cell in row {
            let _ = write!(output, "<td>{}</td>", html_escape(cell));
        }
        output.push_str("</tr>\n");
    }
    output.push_str("                    </tbody>\n                </table>\n");
    let hidden = table.hidden_rows();
    if hidden > 0 {
        let _ = writeln!(
            output,
            r#"                <div class="more">{hidden} more rows; export CSV for the full list</div>"#
        );
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
