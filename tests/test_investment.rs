//! Investment table ingestion through DuckDB.

mod common;

use hub_planner::{Connection, InvestmentQuery, InvestmentSource, PlannerError};
use serde_json::json;

// ---------------------------------------------------------------------------
// InvestmentQuery
// ---------------------------------------------------------------------------

#[test]
fn total_sums_investment_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(
        &tmp,
        "investimentos.csv",
        "Item,Investimento\nPlataforma,60000.5\nMarketing,25000\nJuridico,14999.5\n",
    );
    let conn = Connection::open_in_memory().unwrap();
    let total = InvestmentQuery::new(&conn).total_from_csv(&path).unwrap();
    common::assert_close(total, 100_000.0);
}

#[test]
fn total_of_integer_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(&tmp, "inv.csv", "Investimento\n1000\n2000\n3000\n");
    let conn = Connection::open_in_memory().unwrap();
    common::assert_close(InvestmentQuery::new(&conn).total_from_csv(&path).unwrap(), 6000.0);
}

#[test]
fn total_skips_non_numeric_cells() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(
        &tmp,
        "inv.csv",
        "Item,Investimento\nA,500\nB,n/a\nC,250\n",
    );
    let conn = Connection::open_in_memory().unwrap();
    common::assert_close(InvestmentQuery::new(&conn).total_from_csv(&path).unwrap(), 750.0);
}

#[test]
fn missing_column_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(&tmp, "costs.csv", "Item,Valor\nA,10\n");
    let conn = Connection::open_in_memory().unwrap();
    let query = InvestmentQuery::new(&conn);

    assert!(!query.has_investment_column(&path).unwrap());
    match query.total_from_csv(&path) {
        Err(PlannerError::MissingColumn { column, .. }) => assert_eq!(column, "Investimento"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn missing_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let conn = Connection::open_in_memory().unwrap();
    let result = InvestmentQuery::new(&conn).total_from_csv(&tmp.path().join("nope.csv"));
    assert!(matches!(result, Err(PlannerError::NotFound(_))));
}

#[test]
fn table_keeps_rows_and_column_order() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(&tmp, "inv.csv", "Item,Investimento\nA,500\nB,250\n");
    let conn = Connection::open_in_memory().unwrap();
    let table = InvestmentQuery::new(&conn).table_from_csv(&path).unwrap();
    assert_eq!(table.columns, vec!["Item", "Investimento"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(0, "Item"), Some(&json!("A")));
    assert_eq!(table.cell(1, "Investimento"), Some(&json!(250)));
    assert!(table.cell(2, "Item").is_none());
    assert!(table.cell(0, "Valor").is_none());
}

#[test]
fn path_with_quote_is_escaped() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(&tmp, "o'brien.csv", "Investimento\n42\n");
    let conn = Connection::open_in_memory().unwrap();
    common::assert_close(InvestmentQuery::new(&conn).total_from_csv(&path).unwrap(), 42.0);
}

// ---------------------------------------------------------------------------
// InvestmentSource
// ---------------------------------------------------------------------------

#[test]
fn manual_source_returns_amount() {
    let conn = Connection::open_in_memory().unwrap();
    assert_eq!(InvestmentSource::Manual(75_000.0).resolve(&conn).unwrap(), 75_000.0);
}

#[test]
fn table_source_sums_column() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(&tmp, "inv.csv", "Investimento\n100\n200\n");
    let conn = Connection::open_in_memory().unwrap();
    let source = InvestmentSource::Table {
        path,
        fallback: 1.0,
    };
    common::assert_close(source.resolve(&conn).unwrap(), 300.0);
}

#[test]
fn table_source_falls_back_when_column_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::write_csv(&tmp, "inv.csv", "Custo\n100\n");
    let conn = Connection::open_in_memory().unwrap();
    let source = InvestmentSource::Table {
        path,
        fallback: 55_000.0,
    };
    assert_eq!(source.resolve(&conn).unwrap(), 55_000.0);
}

#[test]
fn table_source_missing_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let conn = Connection::open_in_memory().unwrap();
    let source = InvestmentSource::Table {
        path: tmp.path().join("absent.csv"),
        fallback: 55_000.0,
    };
    assert!(source.resolve(&conn).is_err());
}
