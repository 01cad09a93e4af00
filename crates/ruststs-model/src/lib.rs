//! STS model types for RustSTS.
//!
//! Inputs, outputs and errors of the Security Token Service Query API
//! (version `2011-06-15`), independent of any wire codec.

pub mod error;
pub mod input;
pub mod operations;
pub mod output;

pub use error::{ErrorDetail, ErrorEnvelope, ProviderError, StsErrorCode};
pub use input::GetFederationTokenInput;
pub use operations::{API_VERSION, StsOperation};
pub use output::{FederatedUser, FederationTokenResult, TemporaryCredentials};
