//! Reference data: placeholder dictionaries and security search.

use crate::core::{IssClient, IssError, Query, Table};
use crate::endpoint::{Endpoint, QueryParams, SECURITIES, get_short_data};

/// Columns returned by [`find_securities`] by default: ticker and state registration number.
pub const FIND_SECURITIES_COLUMNS: [&str; 2] = ["secid", "regnumber"];

/// Lists the values available for one placeholder of ISS addresses.
///
/// Addresses such as `/iss/engines/[engine]/markets/[market]/boards/[board]/securities`
/// contain placeholders; `placeholder` is one of `engines`, `markets`, `boards`,
/// `boardgroups`, `durations`, `securitytypes`, `securitygroups`, `securitycollections`.
///
/// Resource description: <https://iss.moex.com/iss/reference/28>
///
/// # Errors
///
/// Returns [`IssError::MissingTable`] for an unknown placeholder, or any request error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_reference(client: &IssClient, placeholder: &str) -> Result<Table, IssError> {
    let url = Endpoint::new().suffix("index").url(client.base_url())?;
    get_short_data(client, url, placeholder, Query::new()).await
}

/// Finds securities by part of their code, name, ISIN, issuer id or registration number.
///
/// Searching by registration number is a way to recover every ticker an issuer has traded
/// under. Pass an empty `columns` slice to load all columns.
///
/// Resource description: <https://iss.moex.com/iss/reference/5>
///
/// # Errors
///
/// Returns an error if the request fails or the response has no `securities` table.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn find_securities(
    client: &IssClient,
    text: &str,
    columns: &[&str],
) -> Result<Table, IssError> {
    let url = Endpoint::new().suffix(SECURITIES).url(client.base_url())?;
    let query = QueryParams::new()
        .question(text)
        .table(SECURITIES)
        .columns(columns.iter().copied())
        .build();
    get_short_data(client, url, SECURITIES, query).await
}
