//! Error types for the STS client.

use ruststs_model::{ProviderError, StsOperation};
use ruststs_xml::XmlError;

/// Errors returned by [`StsClient`](crate::StsClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum StsError {
    /// The endpoint URL could not be parsed or has no host.
    #[error("invalid STS endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint URL.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP exchange itself failed (DNS, connect, I/O). The transport's
    /// error is carried unchanged.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    /// A 200 response body did not match the operation's result schema.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: StsOperation,
        /// The underlying XML error.
        #[source]
        source: XmlError,
    },

    /// STS rejected the request.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl StsError {
    /// The provider error, if STS rejected the request.
    #[must_use]
    pub fn as_provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience result type for STS client operations.
pub type StsResult<T> = Result<T, StsError>;
