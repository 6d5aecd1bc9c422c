use crate::auth::Claims;
use crate::db::Repository;
use crate::errors::ApiError;
use crate::middleware::authentication::Manager;
use crate::models;
use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get all categories.", skip(claims, repository))]
#[get("", wrap = "Manager::new()")]
pub async fn list(
    claims: web::ReqData<Arc<Claims>>,
    repository: web::Data<Arc<dyn Repository<models::Category>>>,
) -> Result<HttpResponse, ApiError> {
    tracing::debug!("Listing categories for {}", claims.sub);
    repository
        .list()
        .await
        .map(|items| HttpResponse::Ok().json(items))
        .map_err(ApiError::Internal)
}

#[tracing::instrument(name = "Get category.", skip(repository))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    repository: web::Data<Arc<dyn Repository<models::Category>>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    repository
        .fetch(id)
        .await
        .map_err(ApiError::Internal)?
        .map(|item| HttpResponse::Ok().json(item))
        .ok_or_else(|| ApiError::not_found::<models::Category>(id))
}
