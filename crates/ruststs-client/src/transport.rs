//! HTTP transport abstraction and the default `reqwest` implementation.
//!
//! A transport performs exactly one GET per call and hands back the status,
//! headers and the fully read body. Reading the body to the end inside the
//! call releases the connection's body on every exit path, including when
//! the caller later fails to decode it.

use std::fmt::{self, Debug, Write as _};
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

use crate::config::ClientConfig;

/// Future returned by [`HttpTransport::get`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = anyhow::Result<HttpResponse>> + Send + 'a>>;

/// Capability to send an HTTP GET and collect the response.
///
/// Errors are returned for failures of the exchange itself (DNS, connect,
/// I/O); any HTTP status, including 4xx and 5xx, is a successful exchange.
pub trait HttpTransport: Debug + Send + Sync {
    /// Send a GET request to `url`.
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a>;
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a response with no headers.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// The status line text, e.g. `Forbidden` for 403.
    ///
    /// Falls back to the numeric code for statuses without a standard reason.
    #[must_use]
    pub fn status_text(&self) -> &str {
        self.status
            .canonical_reason()
            .unwrap_or_else(|| self.status.as_str())
    }

    /// Human-readable dump of status line, headers and body.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = format!("{} {}\n", self.status.as_str(), self.status_text());
        for (name, value) in &self.headers {
            let _ = writeln!(
                out,
                "{}: {}",
                name,
                String::from_utf8_lossy(value.as_bytes())
            );
        }
        out.push('\n');
        out.push_str(&String::from_utf8_lossy(&self.body));
        out
    }
}

/// Default transport backed by a shared `reqwest::Client`.
///
/// Redirects follow reqwest's native policy.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized
    /// (e.g. the TLS backend fails to load).
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}
