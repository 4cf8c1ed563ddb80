//! Public client surface + builder.
//! Defaults live in `constants`.

mod constants;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::core::{IssError, Query, RawResponse, Transport, net};
use crate::endpoint::Endpoint;
use crate::request::IssRequest;

/// A handle to the ISS service: a configured HTTP connection pool plus the service root.
///
/// The handle is owned by the caller and passed explicitly to every request. Cloning is cheap
/// and clones share the same connection pool, so independent fetches may run concurrently
/// through one pool without any shared mutable state. Connections are released when the last
/// clone is dropped.
///
/// # Example
///
/// ```no_run
/// # use moex_iss::{IssClient, Endpoint, Query};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IssClient::default();
/// let endpoint = Endpoint::new().suffix("securities");
/// let tables = client
///     .request(&endpoint, Query::new().with("q", "SBER"))?
///     .fetch_block(0)
///     .await?;
/// println!("{} securities", tables.table("securities")?.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IssClient {
    http: Client,
    base_url: Url,
}

impl Default for IssClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl IssClient {
    /// Create a new builder.
    pub fn builder() -> IssClientBuilder {
        IssClientBuilder::default()
    }

    /// The service root every endpoint path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves `endpoint` against this client's root and prepares a paginated request for it.
    ///
    /// # Errors
    ///
    /// Returns [`IssError::Url`] if the resulting address is not a valid URL.
    pub fn request(&self, endpoint: &Endpoint, query: Query) -> Result<IssRequest<'_>, IssError> {
        let url = endpoint.url(&self.base_url)?;
        Ok(IssRequest::new(self, url, query))
    }
}

impl Transport for IssClient {
    fn get<'a>(
        &'a self,
        url: &'a Url,
        query: &'a Query,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, IssError>> + Send + 'a>> {
        Box::pin(async move {
            let resp = self.http().get(url.clone()).query(query).send().await?;
            let status = resp.status().as_u16();
            let url = resp.url().to_string();
            let body = net::get_text(resp).await?;
            Ok(RawResponse { status, url, body })
        })
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IssClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    custom_client: Option<Client>,
}

impl IssClientBuilder {
    /// Override the service root (e.g., `https://iss.moex.com/iss`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS, ...).
    /// User agent and timeouts set on this builder are ignored in that case.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default root cannot be parsed or the HTTP client fails to build.
    pub fn build(self) -> Result<IssClient, IssError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http = match self.custom_client {
            Some(client) => client,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                httpb.build()?
            }
        };

        Ok(IssClient { http, base_url })
    }
}
