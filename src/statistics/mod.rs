//! Trading statistics: index composition.

use chrono::NaiveDate;

use crate::core::{IssClient, IssError, Table};
use crate::endpoint::{
    DEFAULT_ENGINE, Endpoint, INDEX_MARKET, QueryParams, STATISTICS, TICKERS, get_short_data,
};

/// Lists the tickers that have been part of `index`, each with the dates it was included.
///
/// With `date`, only the composition on that day is returned.
///
/// Resource description: <https://iss.moex.com/iss/reference/148>
///
/// # Errors
///
/// Returns an error if the request fails or the response has no `tickers` table.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_index_tickers(
    client: &IssClient,
    index: &str,
    date: Option<NaiveDate>,
) -> Result<Table, IssError> {
    let url = Endpoint::new()
        .prefix(STATISTICS)
        .engine(DEFAULT_ENGINE)
        .market(INDEX_MARKET)
        .analytics(index)
        .suffix(TICKERS)
        .url(client.base_url())?;
    let query = QueryParams::new().date(date).build();
    get_short_data(client, url, TICKERS, query).await
}
