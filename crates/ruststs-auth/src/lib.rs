//! AWS Signature Version 2 query signing for RustSTS.
//!
//! STS and the other Query-protocol services accept requests whose parameters
//! travel in the URL query string. Such requests are authenticated by adding
//! the caller's access key, the signing method, and a signature computed over
//! a canonical rendering of the request to the parameter set.
//!
//! # Usage
//!
//! ```rust
//! use ruststs_auth::{Credentials, ParameterSet, sign_v2};
//!
//! let credentials = Credentials::new("AKIDEXAMPLE", "secret", None);
//! let mut params = ParameterSet::new();
//! params.insert("Action", "GetFederationToken");
//!
//! sign_v2(&mut params, &credentials, "GET", "sts.amazonaws.com", "/");
//! assert!(params.get("Signature").is_some());
//! let query = params.to_query_string();
//! assert!(query.starts_with("AWSAccessKeyId=AKIDEXAMPLE&Action=GetFederationToken"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Percent-encoding and canonical query construction
//! - [`credentials`] - Long-lived caller credentials
//! - [`error`] - Signature verification errors
//! - [`params`] - The sorted request parameter set
//! - [`sigv2`] - Signature computation and verification

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod params;
pub mod sigv2;

pub use credentials::Credentials;
pub use error::AuthError;
pub use params::ParameterSet;
pub use sigv2::{sign_v2, verify_query_signature};
