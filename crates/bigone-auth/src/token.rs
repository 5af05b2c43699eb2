//! Bearer-token construction
//!
//! BigONE authenticates private calls with a compact JWS (JWT) carried in the
//! `Authorization: Bearer` header. The token is cheap to build and is minted
//! fresh for every request; nothing is cached.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Claim-set type tag expected by the exchange
const TOKEN_TYPE: &str = "OpenAPIV2";

/// JOSE header for HS256; constant for every token
const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// How far the token's nonce may drift from the exchange clock
///
/// The `nonce` claim is the request timestamp in nanoseconds; the exchange
/// rejects tokens whose nonce falls outside this window. Exposed for callers
/// who schedule requests, not used by the SDK itself.
pub const TOKEN_VALIDITY_WINDOW: Duration = Duration::from_secs(30);

/// Token claim set
///
/// `sub` is the API key identifier, `nonce` the issued-at instant in
/// nanoseconds since the Unix epoch. Both are mandated by the exchange; a
/// mismatch fails every private call with an authentication error.
#[derive(Debug, Serialize)]
struct TokenClaims<'a> {
    #[serde(rename = "type")]
    token_type: &'a str,
    sub: &'a str,
    nonce: u64,
}

/// Build a signed bearer token for a single request
///
/// The payload carries the API key identifier and the current timestamp;
/// the signature is HMAC-SHA256 under the account secret.
///
/// # Errors
/// Returns [`AuthError::Serialize`] if the claim set cannot be encoded.
pub fn sign_token(credentials: &Credentials) -> AuthResult<String> {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos() as u64;

    sign_token_at(credentials, nonce)
}

/// Build a token for a fixed nonce; split out so tests stay deterministic
fn sign_token_at(credentials: &Credentials, nonce: u64) -> AuthResult<String> {
    let claims = TokenClaims {
        token_type: TOKEN_TYPE,
        sub: credentials.api_key(),
        nonce,
    };
    let payload =
        serde_json::to_vec(&claims).map_err(|e| AuthError::Serialize(e.to_string()))?;

    let mut token = String::new();
    token.push_str(&BASE64_URL.encode(TOKEN_HEADER.as_bytes()));
    token.push('.');
    token.push_str(&BASE64_URL.encode(&payload));

    let mut mac = HmacSha256::new_from_slice(credentials.secret_bytes())
        .expect("HMAC can take key of any size");
    mac.update(token.as_bytes());
    let signature = mac.finalize();

    token.push('.');
    token.push_str(&BASE64_URL.encode(signature.into_bytes()));

    trace!(nonce, "minted bearer token");

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("my-key-id", "my-secret").unwrap()
    }

    fn decode_payload(token: &str) -> serde_json::Value {
        let payload = token.split('.').nth(1).unwrap();
        let bytes = BASE64_URL.decode(payload).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_token_has_three_segments() {
        let token = sign_token(&test_credentials()).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_payload_carries_key_identifier() {
        let token = sign_token_at(&test_credentials(), 1_616_492_376_594_000_000).unwrap();
        let payload = decode_payload(&token);

        assert_eq!(payload["type"], "OpenAPIV2");
        assert_eq!(payload["sub"], "my-key-id");
        assert_eq!(payload["nonce"], 1_616_492_376_594_000_000u64);
    }

    #[test]
    fn test_header_is_hs256() {
        let token = sign_token(&test_credentials()).unwrap();
        let header = token.split('.').next().unwrap();
        let bytes = BASE64_URL.decode(header).unwrap();
        let header: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");
    }

    #[test]
    fn test_signature_verifies() {
        let creds = test_credentials();
        let token = sign_token_at(&creds, 42).unwrap();

        let (signing_input, signature) = token.rsplit_once('.').unwrap();
        let mut mac = HmacSha256::new_from_slice(creds.secret_bytes()).unwrap();
        mac.update(signing_input.as_bytes());

        let expected = BASE64_URL.encode(mac.finalize().into_bytes());
        assert_eq!(signature, expected);
    }

    #[test]
    fn test_signing_is_deterministic_for_fixed_nonce() {
        let creds = test_credentials();
        let a = sign_token_at(&creds, 7).unwrap();
        let b = sign_token_at(&creds, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tokens_differ_across_nonces() {
        let creds = test_credentials();
        let a = sign_token_at(&creds, 1).unwrap();
        let b = sign_token_at(&creds, 2).unwrap();
        assert_ne!(a, b);
    }
}
