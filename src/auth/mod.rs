//! Login and bearer-token handling.
//!
//! `TokenService` issues HS256 tokens for the configured account and checks
//! tokens presented on protected routes.

pub mod credentials;
pub mod jwt;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use jwt::{extract_bearer_token, Claims, TokenService};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid login")]
    InvalidCredentials,
    #[error("signing key must not be empty")]
    EmptySigningKey,
    #[error("token lifetime must be a positive number of minutes, got {0}")]
    InvalidLifetime(i64),
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("invalid token issuer")]
    InvalidIssuer,
    #[error("invalid token audience")]
    InvalidAudience,
    #[error("token expired")]
    Expired,
}
