use super::*;

#[test]
fn company_status_row_collects_status_keys() {
    let json = r#"{"companyName":"Acme","total":5,"OPEN":2,"CLOSED":3,"_id":"x1"}"#;
    let row: CompanyStatusRow = serde_json::from_str(json).unwrap();

    assert_eq!(row.company_name, "Acme");
    assert_eq!(row.total, 5);
    assert_eq!(row.statuses.len(), 2);
    assert_eq!(row.statuses["OPEN"], 2);
    assert!(!row.statuses.contains_key("_id"));
}

#[test]
fn top_applicant_reads_camel_case() {
    let json = r#"{"userId":"u1","fullName":"Ada","jobRole":"Nurse","roleCount":2,"totalApplications":5}"#;
    let applicant: TopApplicant = serde_json::from_str(json).unwrap();

    assert_eq!(applicant.user_id, "u1");
    assert_eq!(applicant.job_role.as_deref(), Some("Nurse"));
}

#[test]
fn top_countries_nests_rankings() {
    let json = r#"{
        "byUser": {"data": [{"country": "India", "count": 4}], "total": 4},
        "byJob": {"data": [], "total": 0}
    }"#;
    let countries: TopCountries = serde_json::from_str(json).unwrap();

    assert_eq!(countries.by_user.data[0].country, "India");
    assert!(countries.by_job.data.is_empty());
}

#[test]
fn breakdown_defaults_when_missing() {
    let stats: StatusBreakdown = serde_json::from_str(r#"{"total": 7}"#).unwrap();
    assert_eq!(stats.total, 7);
    assert!(stats.breakdown.is_empty());
}
