use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant is terminal: the crate never retries a request and never returns a partial
/// aggregate after a failure.
#[derive(Debug, Error)]
pub enum IssError {
    /// The transport failed before a response could be read (connection, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The address that returned the error.
        url: String,
    },

    /// The response did not follow the ISS contract: the body is not a two-element
    /// `[metadata, tables]` envelope, or the `history.cursor` table is malformed.
    #[error("ISS protocol violation: {0}")]
    Protocol(String),

    /// The requested table is absent from the response (e.g. no history for the security).
    #[error("table `{table}` is missing from the response")]
    MissingTable {
        /// Name of the table that was requested.
        table: String,
    },
}
