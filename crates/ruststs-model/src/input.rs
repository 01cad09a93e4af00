//! Operation input types.

use ruststs_auth::ParameterSet;

use crate::operations::StsOperation;

/// Input for `GetFederationToken`.
///
/// The duration is passed through unchanged; STS enforces its own bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFederationTokenInput {
    /// Lifetime of the issued credentials, in seconds.
    pub duration_seconds: i64,
    /// Name of the federated user.
    pub name: Option<String>,
    /// Inline session policy (JSON).
    pub policy: Option<String>,
}

impl GetFederationTokenInput {
    /// Input carrying only the duration.
    #[must_use]
    pub fn new(duration_seconds: i64) -> Self {
        Self {
            duration_seconds,
            name: None,
            policy: None,
        }
    }

    /// Set the federated user name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the inline session policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    /// Operation-specific query parameters, including `Action`.
    #[must_use]
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert("Action", StsOperation::GetFederationToken.as_str());
        params.insert("DurationSeconds", self.duration_seconds.to_string());
        if let Some(name) = &self.name {
            params.insert("Name", name.as_str());
        }
        if let Some(policy) = &self.policy {
            params.insert("Policy", policy.as_str());
        }
        params
    }
}
