//! Daily trading history: available dates, board securities and per-security quotes.

mod builder;

pub use builder::HistoryBuilder;

use chrono::NaiveDate;

use crate::core::{IssClient, IssError, Query, Table};
use crate::endpoint::{
    Endpoint, HISTORY, INDEX_MARKET, QueryParams, SECURITIES, Scope, Venue, get_short_data,
};

/// Columns requested by default for daily history: board, trade date, close price and volume
/// in lots and in money.
pub const HISTORY_COLUMNS: [&str; 5] = ["BOARDID", "TRADEDATE", "CLOSE", "VOLUME", "VALUE"];

/// Columns requested by default by [`get_board_securities`].
pub const BOARD_SECURITIES_COLUMNS: [&str; 4] = ["SECID", "REGNUMBER", "LOTSIZE", "SHORTNAME"];

/// Returns the range of dates for which the board has history: one row with `from` and `till`.
///
/// Resource description: <https://iss.moex.com/iss/reference/26>
///
/// # Errors
///
/// Returns an error if the request fails or the response has no `dates` table.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_board_dates(client: &IssClient, venue: &Venue) -> Result<Table, IssError> {
    let url = Endpoint::new()
        .prefix(HISTORY)
        .venue(venue, Scope::Board)
        .suffix("dates")
        .url(client.base_url())?;
    get_short_data(client, url, "dates", Query::new()).await
}

/// Returns the securities traded on the board together with reference columns.
///
/// `table` is `securities` (the dictionary of traded securities) or `marketdata` (results of
/// the current trading day). Pass an empty `columns` slice to load all columns.
///
/// Resource description: <https://iss.moex.com/iss/reference/32>
///
/// # Errors
///
/// Returns an error if the request fails or the response has no `table`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_board_securities(
    client: &IssClient,
    table: &str,
    columns: &[&str],
    venue: &Venue,
) -> Result<Table, IssError> {
    let url = Endpoint::new()
        .venue(venue, Scope::Board)
        .suffix(SECURITIES)
        .url(client.base_url())?;
    let query = QueryParams::new()
        .table(table)
        .columns(columns.iter().copied())
        .build();
    get_short_data(client, url, table, query).await
}

/// History of one security on the default market, all boards, with the default columns.
///
/// Several rows may share a date when the security traded on more than one board. Open
/// bounds load from the beginning or up to the end of the history.
///
/// Resource description: <https://iss.moex.com/iss/reference/63>
///
/// # Errors
///
/// Returns an error if a request fails or the response has no `history` table.
pub async fn get_market_history(
    client: &IssClient,
    security: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Table, IssError> {
    HistoryBuilder::new(client, security)
        .start(start)
        .end(end)
        .fetch()
        .await
}

/// History of one security on the default board, with the default columns.
///
/// Resource description: <https://iss.moex.com/iss/reference/65>
///
/// # Errors
///
/// Returns an error if a request fails or the response has no `history` table.
pub async fn get_board_history(
    client: &IssClient,
    security: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Table, IssError> {
    HistoryBuilder::new(client, security)
        .scope(Scope::Board)
        .start(start)
        .end(end)
        .fetch()
        .await
}

/// History of the MOEX Russia net total return index (`MCFTRR`, board `RTSI`).
///
/// # Errors
///
/// Returns an error if a request fails or the response has no `history` table.
pub async fn get_index_history(
    client: &IssClient,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Table, IssError> {
    HistoryBuilder::new(client, "MCFTRR")
        .venue(Venue::default().market(INDEX_MARKET).board("RTSI"))
        .scope(Scope::Board)
        .start(start)
        .end(end)
        .fetch()
        .await
}
