use moex_iss::{IssError, Table, TableRow, Tables};
use serde_json::json;

fn row(n: u64) -> TableRow {
    let mut row = TableRow::new();
    row.insert("N".into(), json!(n));
    row
}

#[test]
fn append_creates_then_extends() {
    let mut tables = Tables::new();
    tables.append("history", vec![row(0), row(1)]);
    tables.append("dates", vec![row(9)]);
    tables.append("history", vec![row(2)]);

    let names: Vec<_> = tables.names().collect();
    assert_eq!(names, ["history", "dates"]);
    let ns: Vec<_> = tables.get("history").unwrap().iter().map(|r| r["N"].clone()).collect();
    assert_eq!(ns, [json!(0), json!(1), json!(2)]);
}

#[test]
fn select_returns_named_table() {
    let tables: Tables = [("securities".to_string(), vec![row(1)])].into_iter().collect();
    let table: Table = tables.select("securities").unwrap();
    assert_eq!(table, vec![row(1)]);
}

#[test]
fn select_missing_table_names_it() {
    let tables: Tables = [("a".to_string(), Vec::new())].into_iter().collect();
    let err = tables.select("b").unwrap_err();
    match &err {
        IssError::MissingTable { table } => assert_eq!(table, "b"),
        other => panic!("expected MissingTable, got {other:?}"),
    }
    assert!(err.to_string().contains("`b`"));
}

#[test]
fn remove_keeps_order_of_the_rest() {
    let mut tables: Tables = ["a", "b", "c"]
        .into_iter()
        .map(|n| (n.to_string(), Vec::new()))
        .collect();
    assert!(tables.remove("b").is_some());
    assert!(tables.remove("b").is_none());
    let names: Vec<_> = tables.names().collect();
    assert_eq!(names, ["a", "c"]);
    assert_eq!(tables.first().map(|(n, _)| n), Some("a"));
}

#[test]
fn serializes_back_to_object_in_order() {
    let tables: Tables = serde_json::from_str(r#"{"z": [{"N": 1}], "a": []}"#).unwrap();
    assert_eq!(serde_json::to_string(&tables).unwrap(), r#"{"z":[{"N":1}],"a":[]}"#);
}
