//! STS operation enum.

use std::fmt;

/// STS Query API version sent with every request.
pub const API_VERSION: &str = "2011-06-15";

/// Supported STS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StsOperation {
    /// Issue temporary credentials for a federated user.
    GetFederationToken,
}

impl StsOperation {
    /// The `Action` parameter value for this operation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetFederationToken => "GetFederationToken",
        }
    }
}

impl fmt::Display for StsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
