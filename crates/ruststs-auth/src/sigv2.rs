//! AWS Signature Version 2 for Query-protocol requests.
//!
//! The signer adds the authentication parameters to the request's
//! [`ParameterSet`] and then signs the canonical rendering of the set:
//!
//! ```text
//! Signature = Base64(HMAC-SHA256(SecretKey, StringToSign))
//!
//! StringToSign = HTTP-Verb + "\n" +
//!                lowercase(Host) + "\n" +
//!                Path + "\n" +
//!                CanonicalQueryString
//! ```
//!
//! The canonical query string covers every parameter except `Signature`
//! itself, including `AWSAccessKeyId`, `SignatureVersion`, `SignatureMethod`
//! and, for session credentials, `SecurityToken`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{build_string_to_sign, query_decode};
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::params::ParameterSet;

/// Parameter carrying the signature.
pub const SIGNATURE_PARAM: &str = "Signature";
/// Parameter carrying the signer's access key ID.
pub const ACCESS_KEY_PARAM: &str = "AWSAccessKeyId";
/// Parameter carrying the signature version.
pub const SIGNATURE_VERSION_PARAM: &str = "SignatureVersion";
/// Parameter carrying the signature method.
pub const SIGNATURE_METHOD_PARAM: &str = "SignatureMethod";
/// Parameter carrying the session token of temporary credentials.
pub const SECURITY_TOKEN_PARAM: &str = "SecurityToken";

/// The signature version this module implements.
pub const SIGNATURE_VERSION: &str = "2";
/// The only signature method this module implements.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

type HmacSha256 = Hmac<Sha256>;

/// Sign `params` in place for a request to `method host path`.
///
/// Adds the authentication parameters, computes the signature over the
/// canonical query string, and inserts it under `Signature`. Afterwards
/// [`ParameterSet::to_query_string`] yields the query string to transmit,
/// ordered exactly as it was signed.
///
/// # Examples
///
/// ```
/// use ruststs_auth::{Credentials, ParameterSet, sign_v2};
///
/// let creds = Credentials::new("AKID", "secret", None);
/// let mut params = ParameterSet::new();
/// params.insert("Action", "GetFederationToken");
/// sign_v2(&mut params, &creds, "GET", "sts.amazonaws.com", "/");
///
/// assert_eq!(params.get("SignatureVersion"), Some("2"));
/// assert_eq!(params.get("SignatureMethod"), Some("HmacSHA256"));
/// ```
pub fn sign_v2(
    params: &mut ParameterSet,
    credentials: &Credentials,
    method: &str,
    host: &str,
    path: &str,
) {
    params.remove(SIGNATURE_PARAM);
    params.insert(ACCESS_KEY_PARAM, credentials.access_key_id());
    params.insert(SIGNATURE_VERSION_PARAM, SIGNATURE_VERSION);
    params.insert(SIGNATURE_METHOD_PARAM, SIGNATURE_METHOD);
    if let Some(token) = credentials.session_token() {
        params.insert(SECURITY_TOKEN_PARAM, token);
    }

    let string_to_sign = build_string_to_sign(method, host, path, &params.to_query_string());
    debug!(string_to_sign = ?string_to_sign, "Built SigV2 string to sign");

    let signature = compute_signature(credentials.secret_access_key(), &string_to_sign);
    params.insert(SIGNATURE_PARAM, signature);
}

/// Verify a received SigV2 query string against the expected credentials.
///
/// `query` is the raw (still percent-encoded) query string. On success the
/// decoded parameters are returned without the `Signature` entry.
///
/// # Errors
///
/// Returns an [`AuthError`] if a signing parameter is missing or unsupported,
/// the request was signed by another access key, or the signature does not
/// match.
pub fn verify_query_signature(
    query: &str,
    method: &str,
    host: &str,
    path: &str,
    credentials: &Credentials,
) -> Result<ParameterSet, AuthError> {
    let mut params: ParameterSet = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (query_decode(k), query_decode(v))
        })
        .collect();

    let provided = params
        .remove(SIGNATURE_PARAM)
        .ok_or_else(|| AuthError::MissingQueryParam(SIGNATURE_PARAM.to_owned()))?;

    let version = required(&params, SIGNATURE_VERSION_PARAM)?;
    if version != SIGNATURE_VERSION {
        return Err(AuthError::UnsupportedVersion(version.to_owned()));
    }
    let method_param = required(&params, SIGNATURE_METHOD_PARAM)?;
    if method_param != SIGNATURE_METHOD {
        return Err(AuthError::UnsupportedAlgorithm(method_param.to_owned()));
    }
    let access_key_id = required(&params, ACCESS_KEY_PARAM)?;
    if access_key_id != credentials.access_key_id() {
        return Err(AuthError::AccessKeyNotFound(access_key_id.to_owned()));
    }

    let string_to_sign = build_string_to_sign(method, host, path, &params.to_query_string());
    let expected = compute_signature(credentials.secret_access_key(), &string_to_sign);

    if provided.as_bytes().ct_eq(expected.as_bytes()).into() {
        debug!(access_key_id = %credentials.access_key_id(), "SigV2 verification succeeded");
        Ok(params)
    } else {
        debug!(
            expected = %expected,
            provided = %provided,
            "SigV2 signature mismatch"
        );
        Err(AuthError::SignatureDoesNotMatch)
    }
}

/// Compute the SigV2 signature: Base64(HMAC-SHA256(secret, string_to_sign)).
#[must_use]
pub fn compute_signature(secret_key: &str, string_to_sign: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

fn required<'a>(params: &'a ParameterSet, key: &str) -> Result<&'a str, AuthError> {
    params
        .get(key)
        .ok_or_else(|| AuthError::MissingQueryParam(key.to_owned()))
}
