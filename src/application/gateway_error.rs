// Error taxonomy shared by every gateway operation
use axum::http::StatusCode;
use thiserror::Error;

/// Upstream operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Authenticate,
    ListAccounts,
    GetAccount,
    GetMeasurements,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Authenticate => "authenticate",
            Operation::ListAccounts => "list_accounts",
            Operation::GetAccount => "get_account",
            Operation::GetMeasurements => "get_measurements",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Required caller input that was absent or unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Authorization header required")]
    MissingAuthorization,

    #[error("Email and password required")]
    MissingCredentials,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("accountNumber parameter required")]
    MissingAccountNumber,

    #[error("accountNumber, propertyId and date required")]
    MissingMeasurementParameters,

    #[error("Invalid frequencyType: {0}")]
    InvalidFrequencyType(String),
}

/// Deployment configuration the tariff endpoint depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid numeric value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upstream understood the request and answered with a GraphQL error.
    #[error("{message}")]
    UpstreamRejected { operation: Operation, message: String },

    /// Upstream answered with something that is not a usable GraphQL payload.
    #[error("{detail}")]
    UpstreamProtocol { status: u16, detail: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    pub fn non_json(status: u16) -> Self {
        Self::UpstreamProtocol {
            status,
            detail: format!("API returned non-JSON response (status {})", status),
        }
    }

    pub fn malformed(status: u16, reason: impl std::fmt::Display) -> Self {
        Self::UpstreamProtocol {
            status,
            detail: format!("API returned malformed response (status {}): {}", status, reason),
        }
    }

    /// HTTP status the adapters answer with.
    ///
    /// - Missing authorization: 401
    /// - Other validation failures: 400
    /// - Upstream GraphQL error: 401 for authenticate, 400 otherwise
    /// - Protocol failure: 502
    /// - Configuration and internal failures: 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(ValidationError::MissingAuthorization) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamRejected {
                operation: Operation::Authenticate,
                ..
            } => StatusCode::UNAUTHORIZED,
            Self::UpstreamRejected { .. } => StatusCode::BAD_REQUEST,
            Self::UpstreamProtocol { .. } => StatusCode::BAD_GATEWAY,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            GatewayError::from(ValidationError::MissingAuthorization).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::from(ValidationError::MissingAccountNumber).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::UpstreamRejected {
                operation: Operation::Authenticate,
                message: "bad credentials".into(),
            }
            .status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::UpstreamRejected {
                operation: Operation::ListAccounts,
                message: "bad token".into(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GatewayError::non_json(503).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            GatewayError::from(ConfigurationError::Missing(vec!["TARIFF_LOW_PRICE"])).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::Internal("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GatewayError::non_json(503).to_string(),
            "API returned non-JSON response (status 503)"
        );
        assert_eq!(
            ConfigurationError::Missing(vec!["TARIFF_LOW_PRICE", "TARIFF_HIGH_PRICE"]).to_string(),
            "Missing environment variables: TARIFF_LOW_PRICE, TARIFF_HIGH_PRICE"
        );
        assert_eq!(
            GatewayError::from(ValidationError::MissingAuthorization).to_string(),
            "Authorization header required"
        );
    }
}
