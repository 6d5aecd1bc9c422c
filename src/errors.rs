use crate::auth::AuthError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors a handler can answer with. Each maps to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Login inválido.")]
    InvalidCredentials,
    #[error("ID inválido.")]
    IdMismatch,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// "Categoria com ID 5 não encontrada." / "Produto com ID 5 não encontrado."
    pub fn not_found<T: crate::models::Record>(id: i32) -> Self {
        let suffix = if T::LABEL.ends_with('a') {
            "encontrada"
        } else {
            "encontrado"
        };
        Self::NotFound(format!("{} com ID {} não {}.", T::LABEL, id, suffix))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::IdMismatch | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // storage details stay in the logs
        let message = match self {
            Self::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(status).json(json!({
            "status": "Error",
            "code": status.as_u16(),
            "message": message,
        }))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::EmptySigningKey | AuthError::InvalidLifetime(_) | AuthError::Signing(_) => {
                tracing::error!("Token issuing failed: {}", err);
                Self::Internal(err.to_string())
            }
            other => Self::Unauthorized(other.to_string()),
        }
    }
}
