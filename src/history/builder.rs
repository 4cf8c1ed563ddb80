use chrono::NaiveDate;

use crate::core::{IssClient, IssError, Query, Table};
use crate::endpoint::{Endpoint, HISTORY, QueryParams, Scope, Venue, get_long_data};
use crate::history::HISTORY_COLUMNS;

/// A builder for the daily history of one security.
///
/// Defaults: shares on the stock engine, every board of the market, the whole history,
/// columns [`HISTORY_COLUMNS`]. The result is always loaded in full, however many pages the
/// server splits it into.
///
/// ```no_run
/// # use moex_iss::{HistoryBuilder, IssClient};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IssClient::default();
/// let rows = HistoryBuilder::new(&client, "SNGSP")
///     .board("TQBR")
///     .between(
///         NaiveDate::from_ymd_opt(2018, 1, 3).unwrap(),
///         NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
///     )
///     .fetch()
///     .await?;
/// println!("{} trading days", rows.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HistoryBuilder<'a> {
    client: &'a IssClient,
    security: String,
    venue: Venue,
    scope: Scope,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    columns: Vec<String>,
}

impl<'a> HistoryBuilder<'a> {
    pub fn new(client: &'a IssClient, security: impl Into<String>) -> Self {
        Self {
            client,
            security: security.into(),
            venue: Venue::default(),
            scope: Scope::Market,
            start: None,
            end: None,
            columns: HISTORY_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn venue(mut self, venue: Venue) -> Self {
        self.venue = venue;
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Restricts the history to a single board.
    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.venue.board = board.into();
        self.scope = Scope::Board;
        self
    }

    #[must_use]
    pub fn start(mut self, start: Option<NaiveDate>) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn end(mut self, end: Option<NaiveDate>) -> Self {
        self.end = end;
        self
    }

    /// Both bounds of the date range, inclusive.
    #[must_use]
    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(Some(start)).end(Some(end))
    }

    /// Columns to load; an empty list loads all columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new()
            .prefix(HISTORY)
            .venue(&self.venue, self.scope)
            .security(&self.security)
    }

    pub fn query(&self) -> Query {
        QueryParams::new()
            .start(self.start)
            .end(self.end)
            .table(HISTORY)
            .columns(self.columns.iter().cloned())
            .build()
    }

    /// Loads every page of the history and returns the `history` table.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails or the response has no `history` table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(security = %self.security)))]
    pub async fn fetch(self) -> Result<Table, IssError> {
        let url = self.endpoint().url(self.client.base_url())?;
        get_long_data(self.client, url, HISTORY, self.query()).await
    }
}
