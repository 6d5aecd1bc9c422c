use crate::auth::{extract_bearer_token, TokenService};
use crate::errors::ApiError;
use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use std::sync::Arc;

#[tracing::instrument(name = "Authenticate with JWT", skip(req))]
pub fn try_jwt(req: &ServiceRequest) -> Result<(), ApiError> {
    let authorization = get_header::<String>(req, "authorization")
        .map_err(ApiError::Unauthorized)?
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization token".to_string()))?;

    let token = extract_bearer_token(&authorization).map_err(ApiError::Unauthorized)?;

    let tokens = req.app_data::<web::Data<TokenService>>().ok_or_else(|| {
        tracing::error!("Token service is not registered");
        ApiError::Internal("token service missing".to_string())
    })?;

    let claims = tokens.validate_token(token).map_err(|err| {
        tracing::warn!("JWT validation failed: {}", err);
        ApiError::from(err)
    })?;

    tracing::debug!("JWT authentication successful for {}", claims.sub);
    req.extensions_mut().insert(Arc::new(claims));

    Ok(())
}
