//! Configuration for the `ruststs` binary.
//!
//! All configuration is driven by environment variables.

use std::env;

use anyhow::{Context, Result};
use ruststs_client::{GLOBAL_STS_ENDPOINT, Region};

/// Resolved binary configuration.
#[derive(Clone)]
pub struct CliConfig {
    /// Access key ID of the calling identity.
    pub access_key_id: String,
    /// Secret access key of the calling identity.
    pub secret_access_key: String,
    /// Session token, when calling with temporary credentials.
    pub session_token: Option<String>,
    /// Region name.
    pub region: String,
    /// STS endpoint URL.
    pub endpoint: String,
    /// Requested token lifetime.
    pub duration_seconds: i64,
    /// Federated user name.
    pub federated_user_name: Option<String>,
    /// Dump requests and responses.
    pub diagnostics: bool,
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("access_key_id", &self.access_key_id)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("duration_seconds", &self.duration_seconds)
            .field("federated_user_name", &self.federated_user_name)
            .field("diagnostics", &self.diagnostics)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the access key pair is missing or
    /// `STS_DURATION_SECONDS` is not an integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_key_id = lookup("AWS_ACCESS_KEY_ID").context("AWS_ACCESS_KEY_ID is not set")?;
        let secret_access_key =
            lookup("AWS_SECRET_ACCESS_KEY").context("AWS_SECRET_ACCESS_KEY is not set")?;
        let duration_seconds = match lookup("STS_DURATION_SECONDS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid STS_DURATION_SECONDS: {v}"))?,
            None => 3600,
        };

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token: lookup("AWS_SESSION_TOKEN"),
            region: lookup("AWS_REGION").unwrap_or_else(|| Region::DEFAULT.to_owned()),
            endpoint: lookup("STS_ENDPOINT").unwrap_or_else(|| GLOBAL_STS_ENDPOINT.to_owned()),
            duration_seconds,
            federated_user_name: lookup("STS_FEDERATED_USER_NAME"),
            diagnostics: lookup("STS_DIAGNOSTICS").is_some_and(|v| is_truthy(&v)),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_owned()),
        })
    }

    /// The region descriptor for the client.
    #[must_use]
    pub fn region(&self) -> Region {
        Region::new(self.region.clone(), self.endpoint.clone())
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v, "1" | "true" | "yes" | "TRUE" | "YES")
}
