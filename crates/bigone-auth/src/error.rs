//! Error types for authentication operations

/// Errors that can occur while building a bearer token
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Failed to serialize token claims
    #[error("Token serialization error: {0}")]
    Serialize(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("BIGONE_API_KEY".to_string());
        assert!(err.to_string().contains("BIGONE_API_KEY"));
    }
}
