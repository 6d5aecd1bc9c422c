use crate::auth::TokenService;
use crate::errors::ApiError;
use crate::forms;
use actix_web::{post, web, HttpResponse, Result};

/// A missing or unreadable body is an invalid login like any other.
#[tracing::instrument(name = "Login.", skip(form, tokens))]
#[post("/login")]
pub async fn handler(
    form: Option<web::Json<forms::LoginForm>>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, ApiError> {
    let form = form.ok_or(ApiError::InvalidCredentials)?.into_inner();
    let token = tokens.issue_token(&form.username, &form.password)?;

    tracing::info!("Issued token for {}", form.username);
    Ok(HttpResponse::Ok().json(forms::TokenView { token }))
}
