use super::{AuthError, CredentialVerifier};
use crate::configuration::JwtSettings;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Username of the account that logged in.
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Issues and checks HS256 bearer tokens.
///
/// Holds no per-request state; one instance is shared by every worker.
pub struct TokenService {
    issuer: String,
    audience: String,
    lifetime: TimeDelta,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    verifier: Arc<dyn CredentialVerifier>,
}

impl TokenService {
    pub fn new(
        settings: &JwtSettings,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Result<Self, AuthError> {
        if settings.key.is_empty() {
            return Err(AuthError::EmptySigningKey);
        }

        let lifetime = Some(settings.expiration_minutes)
            .filter(|minutes| *minutes > 0)
            .and_then(TimeDelta::try_minutes)
            .ok_or(AuthError::InvalidLifetime(settings.expiration_minutes))?;

        Ok(Self {
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            lifetime,
            encoding_key: EncodingKey::from_secret(settings.key.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.key.as_bytes()),
            verifier,
        })
    }

    pub fn issue_token(&self, username: &str, password: &str) -> Result<String, AuthError> {
        self.issue_token_at(username, password, Utc::now())
    }

    /// Every mismatch yields the same `InvalidCredentials`, whatever the cause.
    pub fn issue_token_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        if !self.verifier.verify(username, password) {
            tracing::debug!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let expires_at = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AuthError::Signing("token expiry is out of range".to_string()))?;

        let claims = Claims {
            sub: username.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        tracing::debug!(
            "Generating JWT for {}, expires in {} min",
            claims.sub,
            self.lifetime.num_minutes()
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| AuthError::Signing(err.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Checks signature, issuer, audience and expiry, stopping at the first failure.
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        // Only the signature is left to jsonwebtoken; claims are checked below in a fixed order.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })?
            .claims;

        if claims.iss != self.issuer {
            return Err(AuthError::InvalidIssuer);
        }

        if claims.aud != self.audience {
            return Err(AuthError::InvalidAudience);
        }

        validate_expiration(&claims, now)?;

        Ok(claims)
    }
}

/// A token is valid strictly before `exp`.
pub fn validate_expiration(claims: &Claims, now: DateTime<Utc>) -> Result<(), AuthError> {
    if now.timestamp() >= claims.exp {
        tracing::debug!("JWT token expired (exp: {}, now: {})", claims.exp, now.timestamp());
        return Err(AuthError::Expired);
    }
    Ok(())
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, String> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("Bearer") => Ok(*token),
        [_, _] => Err("Expected Bearer scheme in Authorization header".to_string()),
        _ => Err("Invalid Authorization header format".to_string()),
    }
}
