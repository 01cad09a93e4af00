//! Transport behavior with the `reqwest` transport.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ruststs_client::{ClientConfig, Region, ReqwestTransport, StsClient, StsError};
    use tokio::net::TcpListener;

    use crate::{STUB_REQUEST_ID, StubReply, StubSts, test_credentials};

    #[tokio::test]
    async fn test_should_surface_connection_refused_as_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = StsClient::new(
            test_credentials(),
            Region::new("us-east-1", format!("http://{addr}/")),
        )
        .unwrap();

        let err = client.get_federation_token(3600).await.unwrap_err();

        let StsError::Transport(source) = err else {
            panic!("expected transport error, got {err:?}");
        };
        let reqwest_err = source
            .downcast_ref::<reqwest::Error>()
            .expect("reqwest error is carried unchanged");
        assert!(reqwest_err.is_connect());
    }

    #[tokio::test]
    async fn test_should_use_injected_reqwest_client() {
        let stub = StubSts::start(StubReply::FederationToken).await;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        let client = StsClient::builder(test_credentials(), stub.region())
            .transport(Arc::new(ReqwestTransport::from_client(http)))
            .build()
            .unwrap();

        let result = client.get_federation_token(3600).await.unwrap();
        assert_eq!(result.request_id, STUB_REQUEST_ID);
    }

    #[tokio::test]
    async fn test_should_build_default_transport_from_config() {
        let stub = StubSts::start(StubReply::FederationToken).await;

        let client = StsClient::builder(test_credentials(), stub.region())
            .config(ClientConfig {
                diagnostics: true,
                connect_timeout: Some(Duration::from_secs(2)),
                request_timeout: Some(Duration::from_secs(5)),
                user_agent: "ruststs-integration".to_owned(),
            })
            .build()
            .unwrap();

        let result = client.get_federation_token(3600).await.unwrap();
        assert_eq!(result.request_id, STUB_REQUEST_ID);
        assert!(client.config().diagnostics);
    }

    #[tokio::test]
    async fn test_should_reject_endpoint_without_host() {
        let region = Region::new("us-east-1", "/no-host");
        let err = StsClient::new(test_credentials(), region).unwrap_err();
        assert!(matches!(err, StsError::InvalidEndpoint { .. }));
    }

    #[tokio::test]
    async fn test_should_keep_anyhow_chain_readable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = StsClient::new(
            test_credentials(),
            Region::new("us-east-1", format!("http://{addr}/")),
        )
        .unwrap();
        let err = client.get_federation_token(3600).await.unwrap_err();

        let wrapped = anyhow::Error::new(err).context("GetFederationToken failed");
        assert!(format!("{wrapped:#}").starts_with("GetFederationToken failed: "));
    }
}
