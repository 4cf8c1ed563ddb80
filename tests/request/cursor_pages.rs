use crate::common::{self, ScriptedTransport, cursor, envelope, history_rows, ok};
use futures::TryStreamExt;
use moex_iss::{IssRequest, Query};
use serde_json::json;

fn three_pages() -> ScriptedTransport {
    ScriptedTransport::new([
        ok(envelope(json!({"history": history_rows(0, 50), "history.cursor": cursor(0, 50, 120)}))),
        ok(envelope(json!({"history": history_rows(50, 100), "history.cursor": cursor(50, 50, 120)}))),
        ok(envelope(json!({"history": history_rows(100, 120), "history.cursor": cursor(100, 50, 120)}))),
    ])
}

#[tokio::test]
async fn fetch_all_follows_cursor_to_total() {
    let transport = three_pages();
    let request = IssRequest::new(&transport, common::stub_url(), Query::new());

    let tables = request.fetch_all().await.unwrap();

    assert_eq!(transport.offsets(), [None, Some("50".to_string()), Some("100".to_string())]);
    assert!(!tables.contains("history.cursor"));
    assert_eq!(tables.len(), 1);
    let history = tables.table("history").unwrap();
    assert_eq!(history.len(), 120);
    for (i, row) in history.iter().enumerate() {
        assert_eq!(row["N"], json!(i));
    }
}

#[tokio::test]
async fn blocks_yield_one_item_per_round_trip_with_cursor_removed() {
    let transport = three_pages();
    let request = IssRequest::new(&transport, common::stub_url(), Query::new());

    let blocks: Vec<_> = request.blocks().try_collect().await.unwrap();

    let sizes: Vec<_> = blocks.iter().map(|b| b.table("history").unwrap().len()).collect();
    assert_eq!(sizes, [50, 50, 20]);
    assert!(blocks.iter().all(|b| !b.contains("history.cursor")));
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn concatenated_blocks_match_unpaginated_answer() {
    let paged = ScriptedTransport::new([
        ok(envelope(json!({"history": history_rows(0, 3), "history.cursor": cursor(0, 3, 7)}))),
        ok(envelope(json!({"history": history_rows(3, 6), "history.cursor": cursor(3, 3, 7)}))),
        ok(envelope(json!({"history": history_rows(6, 7), "history.cursor": cursor(6, 3, 7)}))),
    ]);
    let whole = ScriptedTransport::new([ok(envelope(
        json!({"history": history_rows(0, 7), "history.cursor": cursor(0, 100, 7)}),
    ))]);

    let paged_all = IssRequest::new(&paged, common::stub_url(), Query::new())
        .fetch_all()
        .await
        .unwrap();
    let whole_all = IssRequest::new(&whole, common::stub_url(), Query::new())
        .fetch_all()
        .await
        .unwrap();

    assert_eq!(paged_all, whole_all);
    assert_eq!(whole.calls(), 1);
}

#[tokio::test]
async fn single_request_when_first_page_covers_total() {
    let transport = ScriptedTransport::new([ok(envelope(
        json!({"history": history_rows(0, 50), "history.cursor": cursor(0, 50, 50)}),
    ))]);
    let request = IssRequest::new(&transport, common::stub_url(), Query::new());

    let tables = request.fetch_all().await.unwrap();

    assert_eq!(transport.calls(), 1);
    assert_eq!(tables.table("history").unwrap().len(), 50);
}

#[tokio::test]
async fn empty_result_with_cursor_stops_after_one_request() {
    let transport = ScriptedTransport::new([ok(envelope(
        json!({"history": [], "history.cursor": cursor(0, 100, 0)}),
    ))]);
    let request = IssRequest::new(&transport, common::stub_url(), Query::new());

    let tables = request.fetch_all().await.unwrap();

    assert_eq!(transport.calls(), 1);
    assert!(tables.table("history").unwrap().is_empty());
}

#[tokio::test]
async fn tables_keep_first_seen_order_across_blocks() {
    let transport = ScriptedTransport::new([
        ok(envelope(json!({
            "history": history_rows(0, 2),
            "history.cursor": cursor(0, 2, 4),
        }))),
        ok(envelope(json!({
            "history": history_rows(2, 4),
            "history.cursor": cursor(2, 2, 4),
            "extra": [{"K": 1}],
        }))),
    ]);
    let request = IssRequest::new(&transport, common::stub_url(), Query::new());

    let tables = request.fetch_all().await.unwrap();

    let names: Vec<_> = tables.names().collect();
    assert_eq!(names, ["history", "extra"]);
    assert_eq!(tables.table("history").unwrap().len(), 4);
    assert_eq!(tables.table("extra").unwrap().len(), 1);
}
