use super::*;
use crate::api::mock::MockHttpClient;

const BASE: &str = "http://dash.test/api";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn build(spec: &CardSpec, client: MockHttpClient) -> (Result<Vec<Section>>, Vec<String>) {
    let api = InsightsApi::new(BASE, client);
    let config = Config::default();
    let ctx = CardContext {
        api: &api,
        config: &config,
        range: DateRange::unbounded(),
        today: today(),
    };
    let sections = spec.build(&ctx);
    (sections, api_requests(&api))
}

fn api_requests(api: &InsightsApi<MockHttpClient>) -> Vec<String> {
    api.client().requested()
}

fn spec_for(title: &str) -> &'static CardSpec {
    CATALOGUE.iter().find(|c| c.title == title).unwrap()
}

fn only_chart(sections: Vec<Section>) -> ChartGeometry {
    match sections.into_iter().next() {
        Some(Section::Chart(chart)) => chart,
        other => panic!("expected a chart, got {other:?}"),
    }
}

fn only_table(sections: Vec<Section>) -> CardTable {
    match sections.into_iter().next() {
        Some(Section::Table(table)) => table,
        other => panic!("expected a table, got {other:?}"),
    }
}

#[test]
fn catalogue_titles_are_unique() {
    let mut titles: Vec<_> = CATALOGUE.iter().map(|c| c.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), CATALOGUE.len());
}

#[test]
fn breakdown_card_keeps_statuses() {
    let client = MockHttpClient::new().route(
        "total-jobs",
        r#"{"total": 12, "breakdown": [{"status": "OPEN", "count": 9}, {"status": "CLOSED", "count": 3}], "updatedAt": "2024-06-10"}"#,
    );
    let (sections, _) = build(spec_for("Total Jobs"), client);

    match sections.unwrap().as_slice() {
        [Section::Stat(stat)] => {
            assert_eq!(stat.value, 12);
            assert_eq!(stat.breakdown.len(), 2);
            assert_eq!(stat.updated_at, "2024-06-10");
        }
        other => panic!("unexpected sections: {other:?}"),
    }
}

#[test]
fn trend_defaults_to_trailing_week_and_overrides_color() {
    let client = MockHttpClient::new().route(
        "total-users-trend",
        r##"[{"label": "Users", "color": "#000000", "points": [{"date": "2024-06-09", "value": 4}, {"date": "2024-06-10", "value": 6}]}]"##,
    );
    let (sections, requested) = build(spec_for("Users Trend"), client);

    assert!(requested[0].contains("startDate=2024-06-03&endDate=2024-06-10"));
    let chart = only_chart(sections.unwrap());
    let line = chart.polylines().next().unwrap();
    assert_eq!(line.color, ChartColor::hex("#3b82f6"));
}

#[test]
fn status_trend_shares_the_trailing_week() {
    let client = MockHttpClient::new().route(
        "application-status-trend",
        r#"[{"date": "2024-06-09", "status": "APPLIED", "count": 3},
            {"date": "2024-06-10", "status": "HIRED", "count": 1}]"#,
    );
    let (sections, requested) = build(spec_for("Application Status Trend"), client);

    assert!(requested[0].contains("startDate=2024-06-03&endDate=2024-06-10"));
    let chart = only_chart(sections.unwrap());
    assert_eq!(chart.rects().count(), 2);
}

#[test]
fn employer_policy_is_a_two_slice_pie() {
    let client = MockHttpClient::new().route(
        "employer-policy-status",
        r#"{"accepted": 30, "notAccepted": 10, "total": 40}"#,
    );
    let (sections, _) = build(spec_for("Employer Policy Status"), client);

    let chart = only_chart(sections.unwrap());
    let labels: Vec<_> = chart.legend.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["Accepted", "Not Accepted"]);
    assert_eq!(chart.legend[0].color, ChartColor::hex("#1e8e3e"));
    assert_eq!(chart.wedges().count(), 2);
}

#[test]
fn status_distribution_uses_status_colors_and_no_range() {
    let client = MockHttpClient::new().route(
        "application-status",
        r#"[{"status": "HIRED", "count": 2}, {"status": "ON_HOLD", "count": 1}]"#,
    );
    let (sections, requested) = build(spec_for("Application Status"), client);

    assert!(!requested[0].contains("startDate"));
    let chart = only_chart(sections.unwrap());
    assert_eq!(chart.legend[0].color, ChartColor::hex("#10b981"));
    assert_eq!(chart.legend[1].label, "ON HOLD");
}

#[test]
fn country_comparison_fetches_every_country() {
    let client = MockHttpClient::new().route(
        "top-countries",
        r#"{"byUser": {"data": [{"country": "UK", "count": 5}], "total": 5},
            "byJob": {"data": [{"country": "US", "count": 9}], "total": 9}}"#,
    );
    let (sections, requested) = build(spec_for("Top Countries"), client);

    assert!(requested[0].contains("limit=all"));
    let chart = only_chart(sections.unwrap());
    assert_eq!(chart.rects().count(), 4);
    assert_eq!(chart.legend[0].label, USERS_KEY);
    assert_eq!(chart.legend[0].color, ChartColor::hex("#3b82f6"));
}

#[test]
fn company_status_has_chart_and_table() {
    let client = MockHttpClient::new().route(
        "company-status-counts",
        r#"[{"companyName": "Acme", "total": 3, "OPEN": 2, "CLOSED": 1},
            {"companyName": "Globex", "total": 4, "OPEN": 4}]"#,
    );
    let (sections, _) = build(spec_for("Company Status Counts"), client);
    let sections = sections.unwrap();

    assert!(matches!(sections[0], Section::Chart(_)));
    match &sections[1] {
        Section::Table(table) => {
            assert_eq!(table.headers, ["Company", "CLOSED", "OPEN", "Total"]);
            assert_eq!(table.rows[1], ["Globex", "0", "4", "4"]);
        }
        other => panic!("expected a table, got {other:?}"),
    }
}

#[test]
fn top_applicants_blank_repeated_names() {
    let client = MockHttpClient::new().route(
        "top-applicants",
        r#"[{"userId": "u1", "fullName": "Ada", "jobRole": "Chef", "roleCount": 2, "totalApplications": 5},
            {"userId": "u2", "fullName": "Bo", "jobRole": "Cook", "roleCount": 1, "totalApplications": 1},
            {"userId": "u1", "fullName": "Ada", "jobRole": "Baker", "roleCount": 3, "totalApplications": 5}]"#,
    );
    let (sections, _) = build(spec_for("Top Applicants"), client);

    let table = only_table(sections.unwrap());
    let names: Vec<_> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, ["Ada", "", "Bo"]);
    assert_eq!(table.rows[1][1], "Baker");
}

#[test]
fn application_list_sends_filter() {
    let client = MockHttpClient::new().route(
        "users-application-status",
        r#"{"data": [{"fullName": "Ada", "jobs": 2}]}"#,
    );
    let (sections, requested) = build(spec_for("Users Who Have Not Applied"), client);

    assert!(requested[0].contains("filter=not_applied"));
    let table = only_table(sections.unwrap());
    assert_eq!(table.headers, ["fullName", "jobs"]);
    assert_eq!(table.rows, [["Ada", "2"]]);
}

#[test]
fn jobs_by_company_shows_six_rows() {
    let rows: Vec<String> = (0..8)
        .map(|i| format!(r#"{{"companyName": "C{i}", "jobCount": {i}, "totalApplications": 0}}"#))
        .collect();
    let body = format!("[{}]", rows.join(","));
    let client = MockHttpClient::new().route("jobs-by-company", &body);
    let (sections, _) = build(spec_for("Jobs by Company"), client);

    let table = only_table(sections.unwrap());
    assert_eq!(table.rows.len(), 6);
    assert_eq!(table.hidden_rows(), 2);
}

#[test]
fn failed_list_fetch_yields_empty_table() {
    let client = MockHttpClient::new().failing("top-job-roles", 500);
    let (sections, _) = build(spec_for("Top Job Roles"), client);

    let table = only_table(sections.unwrap());
    assert!(table.rows.is_empty());
}

#[test]
fn failed_chart_fetch_is_an_error() {
    let client = MockHttpClient::new().failing("top-countries-trend", 503);
    let (sections, _) = build(spec_for("Top Countries Trend"), client);
    assert!(sections.is_err());
}
