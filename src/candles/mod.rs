//! Candles (HLOCV bars) and the date ranges for which they are available.

use chrono::NaiveDate;

use crate::core::{IssClient, IssError, Query, Table};
use crate::endpoint::{
    CANDLE_BORDERS, CANDLES, Endpoint, QueryParams, Scope, Venue, get_long_data, get_short_data,
};

/// Table holding the candle borders.
const BORDERS: &str = "borders";

/// Candle size, as understood by ISS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandleInterval {
    Minute1,
    Minute10,
    Hour1,
    #[default]
    Day1,
    Week1,
    Month1,
    Quarter1,
}

impl CandleInterval {
    /// The ISS interval code.
    pub const fn code(self) -> u32 {
        match self {
            CandleInterval::Minute1 => 1,
            CandleInterval::Minute10 => 10,
            CandleInterval::Hour1 => 60,
            CandleInterval::Day1 => 24,
            CandleInterval::Week1 => 7,
            CandleInterval::Month1 => 31,
            CandleInterval::Quarter1 => 4,
        }
    }

    /// Maps an ISS interval code back to an interval.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(CandleInterval::Minute1),
            10 => Some(CandleInterval::Minute10),
            60 => Some(CandleInterval::Hour1),
            24 => Some(CandleInterval::Day1),
            7 => Some(CandleInterval::Week1),
            31 => Some(CandleInterval::Month1),
            4 => Some(CandleInterval::Quarter1),
            _ => None,
        }
    }
}

/// Date ranges of available candles for every interval, across all boards of the market.
///
/// Resource description: <https://iss.moex.com/iss/reference/156>
///
/// # Errors
///
/// Returns an error if the request fails or the response has no `borders` table.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_market_candle_borders(
    client: &IssClient,
    security: &str,
    venue: &Venue,
) -> Result<Table, IssError> {
    candle_borders(client, security, venue, Scope::Market).await
}

/// Date ranges of available candles for every interval, on the venue's board.
///
/// Resource description: <https://iss.moex.com/iss/reference/48>
///
/// # Errors
///
/// Returns an error if the request fails or the response has no `borders` table.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_board_candle_borders(
    client: &IssClient,
    security: &str,
    venue: &Venue,
) -> Result<Table, IssError> {
    candle_borders(client, security, venue, Scope::Board).await
}

async fn candle_borders(
    client: &IssClient,
    security: &str,
    venue: &Venue,
    scope: Scope,
) -> Result<Table, IssError> {
    let url = Endpoint::new()
        .venue(venue, scope)
        .security(security)
        .suffix(CANDLE_BORDERS)
        .url(client.base_url())?;
    get_short_data(client, url, BORDERS, Query::new()).await
}

/// Candles of one security across the market's main boards.
///
/// When the security trades on several main boards, one period may yield one candle per board.
///
/// Resource description: <https://iss.moex.com/iss/reference/155>
///
/// # Errors
///
/// Returns an error if a request fails or the response has no `candles` table.
pub async fn get_market_candles(
    client: &IssClient,
    security: &str,
    interval: CandleInterval,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Table, IssError> {
    CandlesBuilder::new(client, security)
        .interval(interval)
        .start(start)
        .end(end)
        .fetch()
        .await
}

/// Candles of one security on the default board.
///
/// Resource description: <https://iss.moex.com/iss/reference/46>
///
/// # Errors
///
/// Returns an error if a request fails or the response has no `candles` table.
pub async fn get_board_candles(
    client: &IssClient,
    security: &str,
    interval: CandleInterval,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Table, IssError> {
    CandlesBuilder::new(client, security)
        .scope(Scope::Board)
        .interval(interval)
        .start(start)
        .end(end)
        .fetch()
        .await
}

/// A builder for the candles of one security.
///
/// Defaults: daily candles of shares on the stock engine, all main boards, the whole history.
#[derive(Debug, Clone)]
pub struct CandlesBuilder<'a> {
    client: &'a IssClient,
    security: String,
    venue: Venue,
    scope: Scope,
    interval: CandleInterval,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl<'a> CandlesBuilder<'a> {
    pub fn new(client: &'a IssClient, security: impl Into<String>) -> Self {
        Self {
            client,
            security: security.into(),
            venue: Venue::default(),
            scope: Scope::Market,
            interval: CandleInterval::default(),
            start: None,
            end: None,
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

    /// Restricts the candles to a single board.
    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.venue.board = board.into();
        self.scope = Scope::Board;
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: CandleInterval) -> Self {
        self.interval = interval;
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

    #[must_use]
    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(Some(start)).end(Some(end))
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new()
            .venue(&self.venue, self.scope)
            .security(&self.security)
            .suffix(CANDLES)
    }

    pub fn query(&self) -> Query {
        QueryParams::new()
            .interval(self.interval.code())
            .start(self.start)
            .end(self.end)
            .build()
    }

    /// Loads every page of candles and returns the `candles` table.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails or the response has no `candles` table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(security = %self.security)))]
    pub async fn fetch(self) -> Result<Table, IssError> {
        let url = self.endpoint().url(self.client.base_url())?;
        get_long_data(self.client, url, CANDLES, self.query()).await
    }
}
