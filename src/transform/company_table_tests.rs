use std::collections::BTreeMap;

use super::*;

fn row(name: &str, statuses: &[(&str, u64)]) -> CompanyStatusRow {
    CompanyStatusRow {
        company_name: name.to_string(),
        total: statuses.iter().map(|(_, c)| c).sum(),
        statuses: statuses
            .iter()
            .map(|(s, c)| ((*s).to_string(), *c))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn columns_are_sorted_union() {
    let table = CompanyStatusTable::from_rows(vec![
        row("Acme", &[("OPEN", 2)]),
        row("Globex", &[("CLOSED", 1), ("DRAFT", 4)]),
    ]);

    assert_eq!(table.statuses, vec!["CLOSED", "DRAFT", "OPEN"]);
}

#[test]
fn missing_cells_read_zero() {
    let table = CompanyStatusTable::from_rows(vec![
        row("Acme", &[("OPEN", 2)]),
        row("Globex", &[("CLOSED", 1)]),
    ]);

    assert_eq!(table.cell(&table.rows[0], "CLOSED"), 0);
    assert_eq!(table.cell(&table.rows[0], "OPEN"), 2);
}

#[test]
fn grid_has_company_statuses_and_total() {
    let table = CompanyStatusTable::from_rows(vec![row("Acme", &[("OPEN", 2), ("CLOSED", 1)])]);
    let (headers, body) = table.to_grid();

    assert_eq!(headers, vec!["Company", "CLOSED", "OPEN", "Total"]);
    assert_eq!(body, vec![vec!["Acme", "1", "2", "3"]]);
}
