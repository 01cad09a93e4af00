//! RustSTS CLI - fetch a federation token from STS.
//!
//! Prints the `GetFederationToken` result as JSON on stdout.
//!
//! # Usage
//!
//! ```text
//! AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... ruststs
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_ACCESS_KEY_ID` | *(required)* | Access key of the calling identity |
//! | `AWS_SECRET_ACCESS_KEY` | *(required)* | Secret key of the calling identity |
//! | `AWS_SESSION_TOKEN` | *(unset)* | Session token for temporary credentials |
//! | `AWS_REGION` | `us-east-1` | Region name |
//! | `STS_ENDPOINT` | `https://sts.amazonaws.com/` | STS endpoint URL |
//! | `STS_DURATION_SECONDS` | `3600` | Requested token lifetime |
//! | `STS_FEDERATED_USER_NAME` | *(unset)* | Federated user name |
//! | `STS_DIAGNOSTICS` | `false` | Log full request URLs and responses |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;

use anyhow::{Context, Result};
use ruststs_auth::Credentials;
use ruststs_client::{ClientConfig, StsClient};
use ruststs_model::GetFederationTokenInput;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::from_env()?;
    init_tracing(&config.log_level)?;

    info!(
        region = %config.region,
        endpoint = %config.endpoint,
        duration_seconds = config.duration_seconds,
        "requesting federation token"
    );

    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        config.session_token.clone(),
    );
    let client = StsClient::builder(credentials, config.region())
        .config(ClientConfig {
            diagnostics: config.diagnostics,
            ..ClientConfig::default()
        })
        .build()
        .context("failed to create STS client")?;

    let mut input = GetFederationTokenInput::new(config.duration_seconds);
    if let Some(name) = &config.federated_user_name {
        input = input.with_name(name.clone());
    }

    let result = client
        .get_federation_token_with(input)
        .await
        .context("GetFederationToken failed")?;

    info!(
        request_id = %result.request_id,
        arn = %result.federated_user.arn,
        expiration = %result.credentials.expiration,
        "federation token issued"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
