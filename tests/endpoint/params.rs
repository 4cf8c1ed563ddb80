use chrono::NaiveDate;
use moex_iss::QueryParams;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn nothing_set_builds_empty_query() {
    assert!(QueryParams::new().build().is_empty());
}

#[test]
fn dates_map_to_from_till_and_date() {
    let query = QueryParams::new()
        .start(date(2018, 1, 1))
        .end(date(2018, 3, 1))
        .date(date(2025, 5, 23))
        .build();
    assert_eq!(query.len(), 3);
    assert_eq!(query.get("from"), Some("2018-01-01"));
    assert_eq!(query.get("till"), Some("2018-03-01"));
    assert_eq!(query.get("date"), Some("2025-05-23"));
}

#[test]
fn table_and_columns_add_two_keys() {
    let query = QueryParams::new()
        .table("history")
        .columns(["TRADEDATE", "CLOSE", "VOLUME"])
        .build();
    assert_eq!(query.len(), 2);
    assert_eq!(query.get("iss.only"), Some("history,history.cursor"));
    assert_eq!(query.get("history.columns"), Some("TRADEDATE,CLOSE,VOLUME"));
}

#[test]
fn full_query() {
    let query = QueryParams::new()
        .question("1-02-65104-D")
        .interval(24)
        .start(date(2011, 12, 15))
        .end(date(2011, 12, 16))
        .table("securities")
        .columns(["secid"])
        .build();
    assert_eq!(query.len(), 6);
    assert_eq!(query.get("q"), Some("1-02-65104-D"));
    assert_eq!(query.get("interval"), Some("24"));
    assert_eq!(query.get("securities.columns"), Some("secid"));
}

#[test]
fn table_without_columns_selects_all_columns() {
    let query = QueryParams::new().table("marketdata").columns(Vec::<String>::new()).build();
    assert_eq!(query.len(), 1);
    assert_eq!(query.get("iss.only"), Some("marketdata,history.cursor"));
}

#[test]
fn columns_without_table_are_not_sent() {
    let query = QueryParams::new().columns(["SECID"]).build();
    assert!(query.is_empty());
}

#[test]
fn empty_inputs_are_omitted() {
    let query = QueryParams::new().question("").interval(0).table("").build();
    assert!(query.is_empty());
}

#[test]
fn building_twice_gives_same_query() {
    let params = QueryParams::new().question("SBER").table("securities").columns(["secid"]);
    assert_eq!(params.build(), params.build());
}
