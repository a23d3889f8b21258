use super::*;
use crate::api::mock::MockHttpClient;
use crate::models::{EmployerPolicyStatus, TopApplicant};

fn api(client: MockHttpClient) -> InsightsApi<MockHttpClient> {
    InsightsApi::new("http://localhost:4000/api", client)
}

#[test]
fn fetch_deserializes_payload() {
    let api = api(MockHttpClient::new().route(
        "employer-policy-status",
        r#"{"accepted": 3, "notAccepted": 1, "total": 4}"#,
    ));

    let status: EmployerPolicyStatus = api
        .fetch(Query::EmployerPolicyStatus, &QueryParams::default())
        .unwrap();

    assert_eq!(status.accepted, 3);
    assert_eq!(status.not_accepted, 1);
}

#[test]
fn fetch_rows_unwraps_envelopes() {
    let body = r#"{"data": [{"userId":"u1","fullName":"Ada","roleCount":1,"totalApplications":2}], "total": 1}"#;
    let api = api(MockHttpClient::new().route("top-applicants", body));

    let rows: Vec<TopApplicant> = api
        .fetch_rows(Query::TopApplicants, &QueryParams::default())
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].job_role, None);
}

#[test]
fn fetch_records_keeps_raw_objects() {
    let api = api(MockHttpClient::new().route("top-job-roles", r#"[{"role":"Chef","count":3}]"#));

    let records = api
        .fetch_records(Query::TopJobRoles, &QueryParams::default())
        .unwrap();

    assert_eq!(records[0]["role"], "Chef");
}

#[test]
fn http_status_errors_propagate() {
    let client = MockHttpClient::new().failing("total-jobs", 500);
    let api = api(client);

    let err = api
        .fetch_value(Query::TotalJobs, &QueryParams::default())
        .unwrap_err();

    assert!(matches!(err, DashError::HttpStatus { status: 500, .. }));
}

#[test]
fn invalid_json_is_an_error() {
    let api = api(MockHttpClient::new().route("total-jobs", "<html>oops</html>"));
    let err = api
        .fetch_value(Query::TotalJobs, &QueryParams::default())
        .unwrap_err();
    assert!(matches!(err, DashError::Json(_)));
}

#[test]
fn requests_use_the_query_url() {
    let client = MockHttpClient::new().route("total-users", r#"{"label":"Users","value":1}"#);
    let api = api(client);
    let _ = api.fetch_value(Query::TotalUsers, &QueryParams::default());

    assert_eq!(api.client.call_count(), 1);
    assert_eq!(
        api.client.requested(),
        vec!["http://localhost:4000/api/insights/total-users?startDate=&endDate="]
    );
}
