//! Integration tests for the `chart` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

const COUNTRIES: &str = r#"[{"label": "UK", "value": 4}, {"label": "US", "value": 2}]"#;

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn bar_chart_prints_svg_to_stdout() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("countries.json", COUNTRIES);

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "bar", "--title", "Top Countries", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("Top Countries"))
        .stdout(predicate::str::contains("<rect"));
}

#[test]
fn chart_writes_output_file() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "policy.json",
        r##"[{"label": "Accepted", "value": 3, "color": "#1e8e3e"},
             {"label": "Not Accepted", "value": 1, "color": "#d93025"}]"##,
    );

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "pie", "-i", "policy.json", "-o", "out/policy.svg"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote pie chart"));

    let svg = fixture.read("out/policy.svg");
    assert!(svg.contains("<path"));
    assert!(svg.contains("#1e8e3e"));
}

#[test]
fn quiet_suppresses_write_notice() {
    let fixture = TestFixture::new();
    fixture.create_file("countries.json", COUNTRIES);

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "chart", "bar", "-i", "countries.json", "-o", "bar.svg"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn chart_kind_is_case_insensitive() {
    let fixture = TestFixture::new();
    fixture.create_file("countries.json", COUNTRIES);

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "BAR", "-i", "countries.json"])
        .assert()
        .success();
}

#[test]
fn empty_line_series_renders_placeholder() {
    let fixture = TestFixture::new();
    fixture.create_file("trend.json", "[]");

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "line", "-i", "trend.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trend data available"));
}

#[test]
fn stacked_chart_uses_local_config_colors() {
    let fixture = TestFixture::new();
    fixture.create_config("[charts.colors]\nOPEN = \"#abcdef\"\n");
    fixture.create_file(
        "status.json",
        r#"[{"label": "Acme", "segments": [{"key": "OPEN", "value": 2}, {"key": "CLOSED", "value": 1}]}]"#,
    );

    insights_dash!()
        .current_dir(fixture.path())
        .args(["chart", "stacked", "-i", "status.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#abcdef"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_chart_kind_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_file("countries.json", COUNTRIES);

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "scatter", "-i", "countries.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chart kind: scatter"));
}

#[test]
fn missing_input_file_exits_with_error() {
    let fixture = TestFixture::new();

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "bar", "-i", "missing.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn wrong_data_shape_exits_with_error() {
    let fixture = TestFixture::new();
    fixture.create_file("countries.json", COUNTRIES);

    insights_dash!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "pie", "-i", "countries.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON error"));
}
