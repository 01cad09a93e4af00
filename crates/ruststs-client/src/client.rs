//! The STS client.
//!
//! [`StsClient`] drives one request through the pipeline: operation
//! parameters, protocol parameters and signature ([`crate::query`]), one GET
//! ([`crate::transport`]), and decoding ([`crate::response`]).

use std::sync::Arc;

use http::Uri;
use ruststs_auth::{Credentials, ParameterSet};
use ruststs_model::{FederationTokenResult, GetFederationTokenInput, StsOperation};
use ruststs_xml::StsDeserialize;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{ClientConfig, Region};
use crate::error::{StsError, StsResult};
use crate::query::build_signed_query;
use crate::response::decode_response;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Tracing target of the diagnostic request/response dumps.
pub const DIAGNOSTICS_TARGET: &str = "ruststs_client::diagnostics";

/// The endpoint URL split into the pieces signing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoint {
    /// `scheme://authority/path`, without any query.
    base: String,
    /// Lowercased authority, including an explicit port.
    host: String,
    /// Request path, `/` when empty.
    path: String,
}

impl Endpoint {
    fn parse(endpoint: &str) -> StsResult<Self> {
        let invalid = |reason: String| StsError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason,
        };

        let uri: Uri = endpoint
            .parse()
            .map_err(|e: http::uri::InvalidUri| invalid(e.to_string()))?;
        let scheme = uri
            .scheme_str()
            .ok_or_else(|| invalid("missing scheme".to_owned()))?;
        let authority = uri
            .authority()
            .ok_or_else(|| invalid("missing host".to_owned()))?;
        let path = match uri.path() {
            "" => "/",
            p => p,
        };

        Ok(Self {
            base: format!("{scheme}://{authority}{path}"),
            host: authority.as_str().to_ascii_lowercase(),
            path: path.to_owned(),
        })
    }
}

#[derive(Debug)]
struct ClientInner {
    credentials: Credentials,
    region: Region,
    endpoint: Endpoint,
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
}

/// Client for the STS Query API.
///
/// Cheap to clone; clones share the same immutable credentials, transport and
/// clock. Concurrent calls share no mutable state.
///
/// # Examples
///
/// ```no_run
/// use ruststs_auth::Credentials;
/// use ruststs_client::{Region, StsClient};
///
/// # async fn example() -> ruststs_client::StsResult<()> {
/// let client = StsClient::new(
///     Credentials::new("AKIDEXAMPLE", "secret", None),
///     Region::default(),
/// )?;
/// let token = client.get_federation_token(3600).await?;
/// println!("{}", token.credentials.access_key_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StsClient {
    inner: Arc<ClientInner>,
}

impl StsClient {
    /// Create a client with the default configuration, transport and clock.
    ///
    /// # Errors
    ///
    /// Returns [`StsError::InvalidEndpoint`] if the region's endpoint URL is
    /// not an absolute URL, or [`StsError::Transport`] if the HTTP client
    /// cannot be initialized.
    pub fn new(credentials: Credentials, region: Region) -> StsResult<Self> {
        Self::builder(credentials, region).build()
    }

    /// Start building a client.
    #[must_use]
    pub fn builder(credentials: Credentials, region: Region) -> StsClientBuilder {
        StsClientBuilder {
            credentials,
            region,
            config: ClientConfig::default(),
            transport: None,
            clock: None,
        }
    }

    /// The region this client talks to.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.inner.region
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Request temporary credentials for a federated user.
    ///
    /// `duration_seconds` is sent as is; STS rejects out-of-range values with
    /// a [`StsError::Provider`] error.
    ///
    /// # Errors
    ///
    /// Returns [`StsError::Transport`] if the request could not be sent,
    /// [`StsError::Provider`] if STS rejected it, and [`StsError::Decode`] if
    /// the success body could not be parsed.
    pub async fn get_federation_token(
        &self,
        duration_seconds: i64,
    ) -> StsResult<FederationTokenResult> {
        self.get_federation_token_with(GetFederationTokenInput::new(duration_seconds))
            .await
    }

    /// Request temporary credentials with the full set of optional inputs.
    ///
    /// # Errors
    ///
    /// Same as [`StsClient::get_federation_token`].
    pub async fn get_federation_token_with(
        &self,
        input: GetFederationTokenInput,
    ) -> StsResult<FederationTokenResult> {
        self.query(StsOperation::GetFederationToken, input.to_params())
            .await
    }

    /// Build the signed request URL for a parameter set.
    fn signed_url(&self, params: ParameterSet) -> String {
        let inner = &*self.inner;
        let query = build_signed_query(
            params,
            &inner.credentials,
            &inner.endpoint.host,
            &inner.endpoint.path,
            inner.clock.as_ref(),
        );
        format!("{}?{query}", inner.endpoint.base)
    }

    async fn query<T: StsDeserialize>(
        &self,
        operation: StsOperation,
        params: ParameterSet,
    ) -> StsResult<T> {
        let url = self.signed_url(params);
        let diagnostics = self.inner.config.diagnostics;

        debug!(operation = %operation, endpoint = %self.inner.endpoint.base, "sending STS request");
        if diagnostics {
            info!(target: DIAGNOSTICS_TARGET, operation = %operation, url = %url, "GET request");
        }

        let response = self.inner.transport.get(&url).await?;

        if diagnostics {
            info!(
                target: DIAGNOSTICS_TARGET,
                operation = %operation,
                response = %response.dump(),
                "response"
            );
        }
        debug!(operation = %operation, status = response.status.as_u16(), "received STS response");

        decode_response(operation, &response)
    }
}

/// Builder for [`StsClient`].
#[derive(Debug)]
pub struct StsClientBuilder {
    credentials: Credentials,
    region: Region,
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl StsClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom clock instead of the system clock.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`StsError::InvalidEndpoint`] for an unusable endpoint URL, or
    /// [`StsError::Transport`] if the default transport cannot be created.
    pub fn build(self) -> StsResult<StsClient> {
        let endpoint = Endpoint::parse(self.region.sts_endpoint())?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(&self.config)?,
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        debug!(
            region = %self.region.name(),
            host = %endpoint.host,
            diagnostics = self.config.diagnostics,
            "created STS client"
        );

        Ok(StsClient {
            inner: Arc::new(ClientInner {
                credentials: self.credentials,
                region: self.region,
                endpoint,
                config: self.config,
                transport,
                clock,
            }),
        })
    }
}

fn default_transport(config: &ClientConfig) -> StsResult<Arc<dyn HttpTransport>> {
    let transport = ReqwestTransport::new(config).map_err(anyhow::Error::from)?;
    Ok(Arc::new(transport))
}
