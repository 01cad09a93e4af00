//! Operation output types.

use serde::Serialize;

/// Temporary credentials issued by STS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemporaryCredentials {
    /// Session token to send alongside the temporary key pair.
    pub session_token: String,
    /// Temporary secret access key.
    pub secret_access_key: String,
    /// Expiration time, as formatted by the provider.
    pub expiration: String,
    /// Temporary access key ID.
    pub access_key_id: String,
}

/// Identity of the federated user the credentials were issued to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FederatedUser {
    /// ARN of the federated user.
    pub arn: String,
    /// Federated user ID (`account:name`).
    pub federated_user_id: String,
}

/// Result of a successful `GetFederationToken` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FederationTokenResult {
    /// Request ID from `ResponseMetadata`.
    pub request_id: String,
    /// The issued credentials.
    pub credentials: TemporaryCredentials,
    /// The federated user identity.
    pub federated_user: FederatedUser,
}
