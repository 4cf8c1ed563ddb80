//! The paginated fetch client.
//!
//! Many ISS resources answer with only the first block of a larger result set (usually 100
//! rows). [`IssRequest`] walks such resources block by block, following the server's
//! `history.cursor` hint when it is present and counting rows when it is not, and can either
//! hand the blocks out one at a time ([`IssRequest::blocks`]) or concatenate them
//! ([`IssRequest::fetch_all`]).

mod paginate;

use std::pin::pin;

use futures::{Stream, TryStreamExt, stream};
use url::Url;

use crate::core::{IssError, Query, Tables, Transport, wire};

/// Always sent: extended JSON (rows as objects), no metadata block.
const BASE_QUERY: [(&str, &str); 2] = [("iss.json", "extended"), ("iss.meta", "off")];

/// Continuation parameter, only sent for a non-zero offset.
const OFFSET_PARAM: &str = "start";

/// A request against one ISS resource: a fixed address, a fixed set of caller parameters and
/// the transport to send them through.
///
/// The request itself holds no mutable state; each call to [`blocks`](Self::blocks) or
/// [`fetch_all`](Self::fetch_all) walks the resource from the beginning with its own offset.
pub struct IssRequest<'a> {
    transport: &'a dyn Transport,
    url: Url,
    query: Query,
}

impl std::fmt::Debug for IssRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssRequest")
            .field("url", &self.url.as_str())
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl<'a> IssRequest<'a> {
    /// Creates a request for `url` with the caller's extra `query` parameters.
    ///
    /// The protocol parameters (`iss.json`, `iss.meta`, `start`) are added per round trip and
    /// take precedence over anything of the same name in `query`.
    pub fn new(transport: &'a dyn Transport, url: Url, query: Query) -> Self {
        Self {
            transport,
            url,
            query,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The caller's parameters, without the protocol ones.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The complete parameter set for the round trip starting at `offset`.
    pub fn page_query(&self, offset: u64) -> Query {
        let mut query = self.query.clone();
        for (k, v) in BASE_QUERY {
            query.insert(k, v);
        }
        if offset != 0 {
            query.insert(OFFSET_PARAM, offset);
        }
        query
    }

    /// Loads a single block starting at row `offset`.
    ///
    /// The returned tables are exactly what the server sent, `history.cursor` included if it
    /// was requested.
    ///
    /// # Errors
    ///
    /// - [`IssError::Status`] if the server answers with a non-success status.
    /// - [`IssError::Protocol`] if the body is not a `[metadata, tables]` envelope.
    /// - [`IssError::Http`] if the transport fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.url)))]
    pub async fn fetch_block(&self, offset: u64) -> Result<Tables, IssError> {
        let query = self.page_query(offset);
        let resp = self.transport.get(&self.url, &query).await?;
        if !resp.is_success() {
            return Err(IssError::Status {
                status: resp.status,
                url: resp.url,
            });
        }
        wire::decode_block(&resp.body)
    }

    /// Streams every block of the resource, one item per round trip.
    ///
    /// Blocks never contain `history.cursor`. The stream is finite and single-pass: it ends once
    /// the cursor reports that `TOTAL` rows were covered, or, without a cursor, after the first
    /// block whose leading table is empty. The first error is yielded and ends the stream.
    ///
    /// A server that never signals exhaustion makes the stream unbounded.
    pub fn blocks(&self) -> impl Stream<Item = Result<Tables, IssError>> + Send + '_ {
        stream::try_unfold(Some(0_u64), move |next| async move {
            let Some(offset) = next else {
                return Ok(None);
            };
            let tables = self.fetch_block(offset).await?;
            let (block, next) = paginate::advance(tables, offset)?;
            Ok::<_, IssError>(Some((block, next)))
        })
    }

    /// Loads every block of the resource and concatenates them table by table.
    ///
    /// Tables keep the order in which they were first seen; rows keep block order.
    ///
    /// # Errors
    ///
    /// Fails with the first error of any round trip. Blocks already loaded are discarded.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.url)))]
    pub async fn fetch_all(&self) -> Result<Tables, IssError> {
        let mut all = Tables::new();
        let mut blocks = pin!(self.blocks());
        while let Some(block) = blocks.try_next().await? {
            all.merge(block);
        }
        Ok(all)
    }
}
