//! Credentials and bearer-token signing for the BigONE API
//!
//! This crate holds the API credentials and builds the signed bearer token
//! attached to every private REST call. Tokens are minted per request from
//! immutable credentials; there is no shared mutable state.
//!
//! # Example
//!
//! ```no_run
//! use bigone_auth::{sign_token, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from BIGONE_API_KEY / BIGONE_API_SECRET
//!     let creds = Credentials::from_env()?;
//!
//!     // Build a bearer token for one request
//!     let token = sign_token(&creds)?;
//!     println!("Authorization: Bearer {}", token);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod token;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use token::{sign_token, TOKEN_VALIDITY_WINDOW};
