//! Error normalization over HTTP.

#[cfg(test)]
mod tests {
    use ruststs_auth::Credentials;
    use ruststs_client::StsError;
    use ruststs_model::StsErrorCode;

    use crate::{ACCESS_KEY_ID, STUB_REQUEST_ID, StubReply, StubSts, error_xml, test_credentials};

    #[tokio::test]
    async fn test_should_report_signature_mismatch_for_wrong_secret() {
        let stub = StubSts::start(StubReply::FederationToken).await;
        let credentials = Credentials::new(ACCESS_KEY_ID, "wrong-secret", None);
        let client = stub.client(credentials);

        let err = client.get_federation_token(3600).await.unwrap_err();

        let provider = err.as_provider_error().expect("provider error");
        assert_eq!(provider.status_code, 403);
        assert_eq!(provider.code, "SignatureDoesNotMatch");
        assert_eq!(
            provider.error_code(),
            Some(StsErrorCode::SignatureDoesNotMatch)
        );
        assert_eq!(provider.request_id, STUB_REQUEST_ID);
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_normalize_validation_error() {
        let body = error_xml(
            "ValidationError",
            "1 validation error detected: Value '10' at 'durationSeconds' failed to satisfy constraint",
        );
        let stub = StubSts::start(StubReply::fixed(400, body)).await;
        let client = stub.client(test_credentials());

        let err = client.get_federation_token(10).await.unwrap_err();

        assert!(matches!(err, StsError::Provider(_)));
        let provider = err.as_provider_error().unwrap();
        assert_eq!(provider.status_code, 400);
        assert_eq!(provider.error_code(), Some(StsErrorCode::ValidationError));
        assert!(provider.message.starts_with("1 validation error detected"));
        assert_eq!(provider.request_id, STUB_REQUEST_ID);
    }

    #[tokio::test]
    async fn test_should_fall_back_to_status_text_for_non_xml_error() {
        let stub = StubSts::start(StubReply::fixed(503, "<html>unavailable</html")).await;
        let client = stub.client(test_credentials());

        let err = client.get_federation_token(3600).await.unwrap_err();

        let provider = err.as_provider_error().unwrap();
        assert_eq!(provider.status_code, 503);
        assert_eq!(provider.code, "");
        assert_eq!(provider.message, "Service Unavailable");
        assert_eq!(provider.request_id, "");
    }

    #[tokio::test]
    async fn test_should_fall_back_to_status_text_for_empty_error_body() {
        let stub = StubSts::start(StubReply::fixed(500, "")).await;
        let client = stub.client(test_credentials());

        let err = client.get_federation_token(3600).await.unwrap_err();

        let provider = err.as_provider_error().unwrap();
        assert_eq!(provider.status_code, 500);
        assert_eq!(provider.message, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_should_report_decode_error_for_malformed_success_body() {
        let reply = StubReply::fixed(200, "<GetFederationTokenResponse><Oops>");
        let stub = StubSts::start(reply).await;
        let client = stub.client(test_credentials());

        let err = client.get_federation_token(3600).await.unwrap_err();

        assert!(matches!(err, StsError::Decode { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_should_treat_success_body_with_error_status_as_provider_error() {
        let stub = StubSts::start(StubReply::fixed(
            403,
            crate::federation_token_xml("stub-user"),
        ))
        .await;
        let client = stub.client(test_credentials());

        let err = client.get_federation_token(3600).await.unwrap_err();

        let provider = err.as_provider_error().unwrap();
        assert_eq!(provider.status_code, 403);
        assert_eq!(provider.code, "");
        assert_eq!(provider.message, "Forbidden");
    }
}
