//! STS error types.
//!
//! STS reports failures as an XML error envelope holding zero or more
//! structured errors plus a request ID. [`ErrorEnvelope`] is that wire shape;
//! [`ProviderError`] is the single normalized error surfaced to callers.

use std::fmt;
use std::str::FromStr;

/// Well-known STS error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StsErrorCode {
    /// The caller is not authorized to perform the operation.
    AccessDenied,
    /// The security token in the request has expired.
    ExpiredToken,
    /// The access key ID does not exist.
    InvalidClientTokenId,
    /// The request signature does not match.
    SignatureDoesNotMatch,
    /// A parameter failed validation (e.g. duration out of range).
    ValidationError,
    /// The session policy is not valid JSON or not a valid policy.
    MalformedPolicyDocument,
    /// The packed session policy and tags are too large.
    PackedPolicyTooLarge,
    /// STS is not activated in the requested region.
    RegionDisabledException,
    /// The request rate is too high.
    Throttling,
    /// A parameter has an invalid value.
    InvalidParameterValue,
    /// A required parameter is missing.
    MissingParameter,
    /// The `Action` is not recognized.
    InvalidAction,
}

impl StsErrorCode {
    /// Returns the error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDenied => "AccessDenied",
            Self::ExpiredToken => "ExpiredToken",
            Self::InvalidClientTokenId => "InvalidClientTokenId",
            Self::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            Self::ValidationError => "ValidationError",
            Self::MalformedPolicyDocument => "MalformedPolicyDocument",
            Self::PackedPolicyTooLarge => "PackedPolicyTooLarge",
            Self::RegionDisabledException => "RegionDisabledException",
            Self::Throttling => "Throttling",
            Self::InvalidParameterValue => "InvalidParameterValue",
            Self::MissingParameter => "MissingParameter",
            Self::InvalidAction => "InvalidAction",
        }
    }
}

impl fmt::Display for StsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StsErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "AccessDenied" => Self::AccessDenied,
            "ExpiredToken" => Self::ExpiredToken,
            "InvalidClientTokenId" => Self::InvalidClientTokenId,
            "SignatureDoesNotMatch" => Self::SignatureDoesNotMatch,
            "ValidationError" => Self::ValidationError,
            "MalformedPolicyDocument" => Self::MalformedPolicyDocument,
            "PackedPolicyTooLarge" => Self::PackedPolicyTooLarge,
            "RegionDisabledException" => Self::RegionDisabledException,
            "Throttling" => Self::Throttling,
            "InvalidParameterValue" => Self::InvalidParameterValue,
            "MissingParameter" => Self::MissingParameter,
            "InvalidAction" => Self::InvalidAction,
            _ => return Err(()),
        })
    }
}

/// One structured error from an error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Provider error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Request ID carried by the entry itself, if any.
    pub request_id: String,
}

/// Wire-level error envelope: a request ID and the structured errors in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Envelope-level request ID.
    pub request_id: String,
    /// Structured errors, possibly empty.
    pub errors: Vec<ErrorDetail>,
}

/// A request rejected by STS.
///
/// Displays as the message alone when there is no code, otherwise as
/// `"<message> (<code>)"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Provider error code; empty when the response carried none.
    pub code: String,
    /// Human-readable message; the HTTP status text when the response carried none.
    pub message: String,
    /// Request ID from the envelope.
    pub request_id: String,
}

impl ProviderError {
    /// Normalize an error envelope and the HTTP status into one error.
    ///
    /// The first structured error supplies code and message. The envelope's
    /// request ID always wins over the entry's own. An empty message falls
    /// back to `status_text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ruststs_model::{ErrorEnvelope, ProviderError};
    ///
    /// let err = ProviderError::from_envelope(ErrorEnvelope::default(), 403, "Forbidden");
    /// assert_eq!(err.code, "");
    /// assert_eq!(err.to_string(), "Forbidden");
    /// ```
    #[must_use]
    pub fn from_envelope(envelope: ErrorEnvelope, status_code: u16, status_text: &str) -> Self {
        let first = envelope.errors.into_iter().next().unwrap_or_default();
        let message = if first.message.is_empty() {
            status_text.to_owned()
        } else {
            first.message
        };

        Self {
            status_code,
            code: first.code,
            message,
            request_id: envelope.request_id,
        }
    }

    /// The well-known error code, if the code is one.
    #[must_use]
    pub fn error_code(&self) -> Option<StsErrorCode> {
        self.code.parse().ok()
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} ({})", self.message, self.code)
        }
    }
}

impl std::error::Error for ProviderError {}
