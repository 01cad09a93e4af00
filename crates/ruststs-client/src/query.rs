//! Query encoding: protocol parameters, signing, and the wire query string.

use chrono::{DateTime, Utc};
use ruststs_auth::{Credentials, ParameterSet, sign_v2};
use ruststs_model::API_VERSION;

use crate::clock::Clock;

/// HTTP method of every Query-protocol request this client sends.
pub const METHOD: &str = "GET";

/// Wire format of the `Timestamp` parameter (UTC, second precision).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format an instant as the `Timestamp` parameter value.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ruststs_client::query::format_timestamp;
///
/// let t = Utc.with_ymd_and_hms(2011, 7, 11, 19, 55, 29).unwrap();
/// assert_eq!(format_timestamp(t), "2011-07-11T19:55:29Z");
/// ```
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Add `Version` and `Timestamp` to the parameter set.
pub fn add_protocol_params(params: &mut ParameterSet, clock: &dyn Clock) {
    params.insert("Version", API_VERSION);
    params.insert("Timestamp", format_timestamp(clock.now()));
}

/// Complete, sign and serialize a parameter set.
///
/// Returns the query string to append to the endpoint. The string is rendered
/// from the same sorted parameters the signature was computed over.
#[must_use]
pub fn build_signed_query(
    mut params: ParameterSet,
    credentials: &Credentials,
    host: &str,
    path: &str,
    clock: &dyn Clock,
) -> String {
    add_protocol_params(&mut params, clock);
    sign_v2(&mut params, credentials, METHOD, host, path);
    params.to_query_string()
}
