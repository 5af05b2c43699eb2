//! Error types for REST API operations

use bigone_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (transport failure or non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response envelope carried a non-zero code
    #[error("API error {code}: {message}")]
    Api {
        /// Envelope error code
        code: i64,
        /// Error message from the exchange
        message: String,
    },

    /// Bearer-token construction failed; no network call was made
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for a private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Failed to interpret an otherwise successful response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = RestError::Api {
            code: 10013,
            message: "order not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("10013"));
        assert!(rendered.contains("order not found"));
    }

    #[test]
    fn test_auth_error_converts() {
        let err: RestError = AuthError::InvalidCredentials("empty API secret".to_string()).into();
        assert!(matches!(err, RestError::Auth(_)));
    }
}
