use crate::db::Repository;
use crate::errors::ApiError;
use crate::models;
use actix_web::{http::header, post, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add category.", skip(repository))]
#[post("")]
pub async fn item(
    form: web::Json<models::Category>,
    repository: web::Data<Arc<dyn Repository<models::Category>>>,
) -> Result<HttpResponse, ApiError> {
    let category = repository
        .insert(form.into_inner())
        .await
        .map_err(ApiError::Internal)?;

    tracing::info!("Created {}", category);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/categorias/{}", category.id)))
        .json(category))
}
