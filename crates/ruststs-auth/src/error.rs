//! Error types for SigV2 signature verification.

/// Errors that can occur while verifying a SigV2-signed query string.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required query parameter is missing.
    #[error("Missing required query parameter: {0}")]
    MissingQueryParam(String),

    /// The signature method is not supported (only `HmacSHA256` is).
    #[error("Unsupported signature method: {0}")]
    UnsupportedAlgorithm(String),

    /// The signature version is not `2`.
    #[error("Unsupported signature version: {0}")]
    UnsupportedVersion(String),

    /// The request was signed by a different access key.
    #[error("Access key not found: {0}")]
    AccessKeyNotFound(String),

    /// The computed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,
}
