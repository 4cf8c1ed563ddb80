use crate::common::{self, cursor, envelope, history_rows};
use httpmock::Method::GET;
use moex_iss::{Endpoint, IssError, Query};
use serde_json::json;

#[tokio::test]
async fn cursor_pages_over_http() {
    common::init_tracing();
    let server = common::setup_server();
    let path = "/iss/history/engines/stock/markets/shares/securities/SNGSP.json";

    let first = server.mock(|when, then| {
        when.method(GET)
            .path(path)
            .query_param("iss.json", "extended")
            .query_param("iss.meta", "off")
            .query_param("from", "2018-01-01")
            .is_true(|req| !req.query_params().iter().any(|(k, _)| k == "start"));
        then.status(200)
            .header("content-type", "application/json")
            .body(envelope(json!({"history": history_rows(0, 100), "history.cursor": cursor(0, 100, 150)})));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path(path)
            .query_param("from", "2018-01-01")
            .query_param("start", "100");
        then.status(200)
            .header("content-type", "application/json")
            .body(envelope(json!({"history": history_rows(100, 150), "history.cursor": cursor(100, 100, 150)})));
    });

    let client = common::client_for(&server);
    let endpoint = Endpoint::new()
        .prefix("history")
        .engine("stock")
        .market("shares")
        .security("SNGSP");
    let tables = client
        .request(&endpoint, Query::new().with("from", "2018-01-01"))
        .unwrap()
        .fetch_all()
        .await
        .unwrap();

    first.assert();
    second.assert();
    assert_eq!(tables.table("history").unwrap().len(), 150);
    assert!(!tables.contains("history.cursor"));
}

#[tokio::test]
async fn http_status_error_carries_address() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/iss/securities1.json");
        then.status(404).body("not found");
    });

    let client = common::client_for(&server);
    let err = client
        .request(&Endpoint::new().suffix("securities1"), Query::new())
        .unwrap()
        .fetch_all()
        .await
        .unwrap_err();

    mock.assert_hits(1);
    match err {
        IssError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.contains("/iss/securities1.json"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
