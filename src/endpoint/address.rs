use url::Url;

use crate::core::IssError;
use crate::endpoint::{DEFAULT_BOARD, DEFAULT_ENGINE, DEFAULT_MARKET};

/// Where a security trades: engine, market and board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Venue {
    pub engine: String,
    pub market: String,
    pub board: String,
}

impl Default for Venue {
    /// Shares on the main board (`stock` / `shares` / `TQBR`).
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE, DEFAULT_MARKET, DEFAULT_BOARD)
    }
}

impl Venue {
    pub fn new(
        engine: impl Into<String>,
        market: impl Into<String>,
        board: impl Into<String>,
    ) -> Self {
        Self {
            engine: engine.into(),
            market: market.into(),
            board: board.into(),
        }
    }

    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = board.into();
        self
    }
}

/// Whether a per-security request covers every board of the market or a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// All boards of the venue's market; one date may appear once per board.
    #[default]
    Market,
    /// Only the venue's board.
    Board,
}

/// Path of an ISS resource, built from optional segments.
///
/// Segments always appear in the same order, each behind its fixed component name:
///
/// `/{prefix}/engines/{engine}/markets/{market}/boards/{board}/analytics/{analytics}/securities/{security}/{suffix}.json`
///
/// Absent or empty segments are skipped without affecting the others.
///
/// ```
/// # use moex_iss::Endpoint;
/// let endpoint = Endpoint::new()
///     .prefix("history")
///     .engine("stock")
///     .market("shares")
///     .security("SNGSP");
/// assert_eq!(
///     endpoint.address("https://iss.moex.com/iss"),
///     "https://iss.moex.com/iss/history/engines/stock/markets/shares/securities/SNGSP.json"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    prefix: Option<String>,
    engine: Option<String>,
    market: Option<String>,
    board: Option<String>,
    analytics: Option<String>,
    security: Option<String>,
    suffix: Option<String>,
}

impl Endpoint {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    #[must_use]
    pub fn analytics(mut self, analytics: impl Into<String>) -> Self {
        self.analytics = Some(analytics.into());
        self
    }

    #[must_use]
    pub fn security(mut self, security: impl Into<String>) -> Self {
        self.security = Some(security.into());
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Sets engine and market from `venue`, plus its board when `scope` is [`Scope::Board`].
    #[must_use]
    pub fn venue(self, venue: &Venue, scope: Scope) -> Self {
        let endpoint = self.engine(&venue.engine).market(&venue.market);
        match scope {
            Scope::Market => endpoint,
            Scope::Board => endpoint.board(&venue.board),
        }
    }

    /// The resource path, starting with `/` and ending with `.json`.
    pub fn path(&self) -> String {
        let segments = [
            ("", &self.prefix),
            ("engines/", &self.engine),
            ("markets/", &self.market),
            ("boards/", &self.board),
            ("analytics/", &self.analytics),
            ("securities/", &self.security),
            ("", &self.suffix),
        ];

        let mut path = String::new();
        for (component, value) in segments {
            if let Some(value) = value.as_deref()
                && !value.is_empty()
            {
                path.push('/');
                path.push_str(component);
                path.push_str(value);
            }
        }
        path.push_str(".json");
        path
    }

    /// The full address of the resource under `base`.
    pub fn address(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// [`address`](Self::address) parsed as a URL.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::Url`] if the result is not a valid URL.
    pub fn url(&self, base: &Url) -> Result<Url, IssError> {
        Ok(Url::parse(&self.address(base.as_str()))?)
    }
}
