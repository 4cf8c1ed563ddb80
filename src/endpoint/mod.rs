//! Addresses, query parameters and table helpers shared by the endpoint wrappers.
//!
//! Full list of ISS resources: <https://iss.moex.com/iss/reference/>

mod address;
mod params;

pub use address::{Endpoint, Scope, Venue};
pub use params::QueryParams;

use url::Url;

use crate::core::{IssError, Query, Table, Transport};
use crate::request::IssRequest;

/// Default engine: stock and deposit market.
pub const DEFAULT_ENGINE: &str = "stock";
/// Default market: shares.
pub const DEFAULT_MARKET: &str = "shares";
/// Market of the exchange indices.
pub const INDEX_MARKET: &str = "index";
/// Default board: main T+ shares board.
pub const DEFAULT_BOARD: &str = "TQBR";

pub const HISTORY: &str = "history";
pub const STATISTICS: &str = "statistics";
pub const SECURITIES: &str = "securities";
pub const CANDLE_BORDERS: &str = "candleborders";
pub const CANDLES: &str = "candles";
pub const TICKERS: &str = "tickers";

/// Loads a resource that answers in one block and returns the named table.
///
/// # Errors
///
/// Fails on any request error, or with [`IssError::MissingTable`] if `table` is absent.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(transport, url, query), err, fields(url = %url)))]
pub async fn get_short_data(
    transport: &dyn Transport,
    url: Url,
    table: &str,
    query: Query,
) -> Result<Table, IssError> {
    let tables = IssRequest::new(transport, url, query).fetch_block(0).await?;
    tables.select(table)
}

/// Loads every block of a paginated resource and returns the named table.
///
/// # Errors
///
/// Fails on any request error, or with [`IssError::MissingTable`] if `table` is absent.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(transport, url, query), err, fields(url = %url)))]
pub async fn get_long_data(
    transport: &dyn Transport,
    url: Url,
    table: &str,
    query: Query,
) -> Result<Table, IssError> {
    let tables = IssRequest::new(transport, url, query).fetch_all().await?;
    tables.select(table)
}
