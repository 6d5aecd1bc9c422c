use crate::db::Repository;
use crate::errors::ApiError;
use crate::models;
use actix_web::{delete, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete category.", skip(repository))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    repository: web::Data<Arc<dyn Repository<models::Category>>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    match repository.delete(id).await.map_err(ApiError::Internal)? {
        true => Ok(HttpResponse::NoContent().finish()),
        false => Err(ApiError::not_found::<models::Category>(id)),
    }
}
