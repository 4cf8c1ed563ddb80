use crate::common::{self, ScriptedTransport, cursor, envelope, history_rows, ok};
use moex_iss::{IssError, IssRequest, Query};
use serde_json::json;

async fn expect_malformed(transport: &ScriptedTransport) -> String {
    let request = IssRequest::new(transport, common::stub_url(), Query::new());
    match request.fetch_all().await.unwrap_err() {
        IssError::Protocol(msg) => {
            assert!(msg.contains("malformed cursor data"), "{msg}");
            msg
        }
        other => panic!("expected Protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn cursor_without_rows() {
    let transport = ScriptedTransport::new([ok(envelope(
        json!({"history": history_rows(0, 5), "history.cursor": []}),
    ))]);
    expect_malformed(&transport).await;
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn cursor_with_two_rows() {
    let transport = ScriptedTransport::new([ok(envelope(json!({
        "history": history_rows(0, 5),
        "history.cursor": [
            {"INDEX": 0, "PAGESIZE": 5, "TOTAL": 10},
            {"INDEX": 5, "PAGESIZE": 5, "TOTAL": 10},
        ],
    })))]);
    let msg = expect_malformed(&transport).await;
    assert!(msg.contains("\"INDEX\":5"), "raw payload missing from {msg}");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn cursor_index_differs_from_offset() {
    let transport = ScriptedTransport::new([ok(envelope(
        json!({"history": history_rows(0, 5), "history.cursor": cursor(5, 5, 20)}),
    ))]);
    expect_malformed(&transport).await;
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn cursor_without_numeric_fields() {
    let transport = ScriptedTransport::new([ok(envelope(json!({
        "history": history_rows(0, 5),
        "history.cursor": [{"INDEX": 0, "PAGESIZE": "five", "TOTAL": 10}],
    })))]);
    expect_malformed(&transport).await;
}

#[tokio::test]
async fn bad_cursor_on_later_page_discards_earlier_pages() {
    let transport = ScriptedTransport::new([
        ok(envelope(json!({"history": history_rows(0, 5), "history.cursor": cursor(0, 5, 20)}))),
        ok(envelope(json!({"history": history_rows(5, 10), "history.cursor": cursor(0, 5, 20)}))),
    ]);
    expect_malformed(&transport).await;
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn cursor_page_size_past_offset_range() {
    let transport = ScriptedTransport::new([
        ok(envelope(json!({"history": history_rows(0, 5), "history.cursor": cursor(0, 5, 100)}))),
        ok(envelope(json!({"history": history_rows(5, 10), "history.cursor": cursor(5, u64::MAX, 100)}))),
    ]);
    let msg = expect_malformed(&transport).await;
    assert!(msg.contains(&u64::MAX.to_string()), "raw payload missing from {msg}");
    assert_eq!(transport.calls(), 2);
}
