use crate::db::Repository;
use crate::errors::ApiError;
use crate::models;
use actix_web::{http::header, post, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add product.", skip(repository))]
#[post("")]
pub async fn item(
    form: web::Json<models::Product>,
    repository: web::Data<Arc<dyn Repository<models::Product>>>,
) -> Result<HttpResponse, ApiError> {
    let product = repository
        .insert(form.into_inner())
        .await
        .map_err(ApiError::Internal)?;

    tracing::info!("Created {}", product);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/produtos/{}", product.id)))
        .json(product))
}
