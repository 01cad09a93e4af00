//! Client configuration.

use std::time::Duration;

/// The global STS endpoint.
pub const GLOBAL_STS_ENDPOINT: &str = "https://sts.amazonaws.com/";

/// An AWS region together with the STS endpoint serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    sts_endpoint: String,
}

impl Region {
    /// Default region name.
    pub const DEFAULT: &'static str = "us-east-1";

    /// Create a region with an explicit STS endpoint URL.
    #[must_use]
    pub fn new(name: impl Into<String>, sts_endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sts_endpoint: sts_endpoint.into(),
        }
    }

    /// Create a region served by its regional endpoint, `https://sts.{name}.amazonaws.com/`.
    #[must_use]
    pub fn regional(name: impl Into<String>) -> Self {
        let name = name.into();
        let sts_endpoint = format!("https://sts.{name}.amazonaws.com/");
        Self { name, sts_endpoint }
    }

    /// The region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The STS endpoint URL.
    #[must_use]
    pub fn sts_endpoint(&self) -> &str {
        &self.sts_endpoint
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new(Self::DEFAULT, GLOBAL_STS_ENDPOINT)
    }
}

/// Per-client configuration.
///
/// The timeouts and user agent configure the default HTTP transport; the
/// client itself never times out or retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Log the outgoing URL and the full response on every call.
    pub diagnostics: bool,
    /// Connect timeout of the default transport.
    pub connect_timeout: Option<Duration>,
    /// Total request timeout of the default transport.
    pub request_timeout: Option<Duration>,
    /// `User-Agent` sent by the default transport.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            connect_timeout: None,
            request_timeout: None,
            user_agent: concat!("ruststs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
