use super::*;

#[test]
fn lists_every_query_once() {
    let listing = format_queries();
    assert_eq!(listing.lines().count(), Query::ALL.len() + 1);
    assert!(listing.lines().next().unwrap().starts_with("QUERY"));
}

#[test]
fn shows_subject_and_paging() {
    let listing = format_queries();
    let line = listing
        .lines()
        .find(|l| l.starts_with("top-applicants "))
        .unwrap();
    assert!(line.contains("top_applicants"));
    assert!(line.ends_with("page+limit"));

    let line = listing.lines().find(|l| l.starts_with("top-countries ")).unwrap();
    assert!(line.ends_with("limit"));
}
