//! Response decoding and error normalization.
//!
//! A 200 response is decoded into the operation's result type. Any other
//! status goes straight to [`normalize_error`]; the success decoder never sees
//! it, even when the body happens to look like a success document.

use http::StatusCode;
use ruststs_model::{ErrorEnvelope, ProviderError, StsOperation};
use ruststs_xml::{StsDeserialize, from_xml};
use tracing::{debug, warn};

use crate::error::{StsError, StsResult};
use crate::transport::HttpResponse;

/// Decode a response into `T`, or into a [`ProviderError`] for non-200 statuses.
///
/// # Errors
///
/// Returns [`StsError::Provider`] for any status other than 200, and
/// [`StsError::Decode`] if a 200 body does not match the result schema.
pub fn decode_response<T: StsDeserialize>(
    operation: StsOperation,
    response: &HttpResponse,
) -> StsResult<T> {
    if response.status != StatusCode::OK {
        return Err(normalize_error(response).into());
    }

    from_xml(&response.body).map_err(|source| StsError::Decode { operation, source })
}

/// Convert an error response into a single [`ProviderError`].
///
/// Bodies that do not follow the error envelope schema (or are empty) are
/// tolerated and treated as an envelope with no errors, so the result then
/// carries only the HTTP status and status text.
#[must_use]
pub fn normalize_error(response: &HttpResponse) -> ProviderError {
    let envelope = if response.body.is_empty() {
        ErrorEnvelope::default()
    } else {
        from_xml::<ErrorEnvelope>(&response.body).unwrap_or_else(|e| {
            warn!(
                status = response.status.as_u16(),
                error = %e,
                "error response does not match the STS error schema"
            );
            ErrorEnvelope::default()
        })
    };

    let status = response.status.as_u16();
    let err = ProviderError::from_envelope(envelope, status, response.status_text());
    debug!(
        status = err.status_code,
        code = %err.code,
        request_id = %err.request_id,
        "STS returned an error"
    );
    err
}
