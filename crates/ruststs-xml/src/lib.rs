//! STS XML deserialization for RustSTS.
//!
//! STS speaks the AWS Query protocol: requests are query strings, responses
//! are XML documents. This crate turns those documents into model types.
//!
//! # Key components
//!
//! - [`StsDeserialize`] trait and [`from_xml`] function for parsing response bodies
//! - [`XmlError`] for malformed or truncated documents
//!
//! # STS XML conventions
//!
//! - Namespace: `https://sts.amazonaws.com/doc/2011-06-15/` (not checked)
//! - Success: `<{Action}Response>` wrapping `<{Action}Result>` and `<ResponseMetadata>`
//! - Errors: `<ErrorResponse>` with `<Error>` entries, or `<Response>` with
//!   `<Errors><Error>` entries, plus a request ID

pub mod deserialize;
pub mod error;

pub use deserialize::{StsDeserialize, from_xml};
pub use error::XmlError;
