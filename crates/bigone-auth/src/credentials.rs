//! API credentials for the BigONE API
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key identifier (public)
    api_key: String,
    /// API secret (zeroized on drop)
    secret: SecretBox<String>,
}

impl Credentials {
    /// Create new credentials from an API key identifier and secret
    ///
    /// # Arguments
    /// * `api_key` - Your BigONE API key identifier
    /// * `secret` - The matching API secret
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] when either value is empty.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("empty API key".to_string()));
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidCredentials("empty API secret".to_string()));
        }

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(secret)),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BIGONE_API_KEY` and `BIGONE_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("BIGONE_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("BIGONE_API_KEY".to_string()))?;
        let secret = std::env::var("BIGONE_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("BIGONE_API_SECRET".to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key identifier
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Controlled access to the secret key material for signing
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretBox with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        let result = Credentials::new("key-id", "");
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = Credentials::new("", "secret");
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "super_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_clone_preserves_key() {
        let creds = Credentials::new("test_api_key", "secret").unwrap();
        let cloned = creds.clone();
        assert_eq!(cloned.api_key(), "test_api_key");
    }
}
