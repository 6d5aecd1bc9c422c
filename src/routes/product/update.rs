use crate::db::Repository;
use crate::errors::ApiError;
use crate::models;
use actix_web::{put, web, HttpResponse, Result};
use std::sync::Arc;

/// Replaces every field of the stored product with the request body.
#[tracing::instrument(name = "Update product.", skip(repository))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<models::Product>,
    repository: web::Data<Arc<dyn Repository<models::Product>>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    if form.id != id {
        return Err(ApiError::IdMismatch);
    }

    repository
        .update(form.into_inner())
        .await
        .map_err(ApiError::Internal)?
        .map(|item| HttpResponse::Ok().json(item))
        .ok_or_else(|| ApiError::not_found::<models::Product>(id))
}
