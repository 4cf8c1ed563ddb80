use std::future::Future;
use std::pin::Pin;

use url::Url;

use crate::core::{IssError, Query};

/// What a single HTTP round trip produced, before any ISS-specific decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The address that was actually requested, query string included.
    pub url: String,
    /// The raw response body.
    pub body: String,
}

impl RawResponse {
    /// Whether the status code is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A trait for transports that can issue an HTTP GET with query parameters.
///
/// The paginated fetch client only ever talks to the network through this trait, so any
/// scripted stand-in can drive it in tests. It is implemented by [`IssClient`](crate::IssClient)
/// over `reqwest`.
///
/// Implementations must not interpret the status code: a non-success status is returned as a
/// normal [`RawResponse`] and mapped to [`IssError::Status`] by the caller. Only failures to
/// obtain a response at all should be reported as errors.
pub trait Transport: Send + Sync {
    /// Asynchronously performs `GET url?query`.
    ///
    /// # Arguments
    /// * `url` - The resource address, without query string.
    /// * `query` - The complete set of query parameters to send.
    ///
    /// # Returns
    /// A `Future` that resolves to the status, final address and body of the response.
    fn get<'a>(
        &'a self,
        url: &'a Url,
        query: &'a Query,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, IssError>> + Send + 'a>>;
}
