//! Signed STS Query API client for RustSTS.
//!
//! This crate issues `GetFederationToken` requests against an STS endpoint:
//! it assembles the operation parameters, adds the protocol parameters and a
//! SigV2 signature, sends one GET through an [`HttpTransport`], and decodes
//! either the typed result or a normalized [`ProviderError`].
//!
//! # Usage
//!
//! ```no_run
//! use ruststs_auth::Credentials;
//! use ruststs_client::{ClientConfig, Region, StsClient};
//!
//! # async fn example() -> ruststs_client::StsResult<()> {
//! let client = StsClient::builder(
//!     Credentials::new("AKIDEXAMPLE", "secret", None),
//!     Region::regional("eu-west-1"),
//! )
//! .config(ClientConfig {
//!     diagnostics: true,
//!     ..ClientConfig::default()
//! })
//! .build()?;
//!
//! let token = client.get_federation_token(900).await?;
//! println!("expires at {}", token.credentials.expiration);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - The client and its builder
//! - [`clock`] - Injectable time source for request timestamps
//! - [`config`] - Client configuration and region endpoints
//! - [`error`] - Client error type
//! - [`query`] - Protocol parameters, signing and query serialization
//! - [`response`] - Response decoding and error normalization
//! - [`transport`] - HTTP transport trait and `reqwest` implementation
//!
//! [`ProviderError`]: ruststs_model::ProviderError

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod query;
pub mod response;
pub mod transport;

pub use client::{StsClient, StsClientBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ClientConfig, GLOBAL_STS_ENDPOINT, Region};
pub use error::{StsError, StsResult};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportFuture};

// Compile-time assertions: the client must be shareable across tasks.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<StsClient>;
    let _ = assert_send_sync::<StsError>;
};
