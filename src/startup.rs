use crate::auth::{CredentialVerifier, StaticCredentials, TokenService};
use crate::configuration::Settings;
use crate::db::Store;
use crate::errors::ApiError;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware::Compress, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

/// Builds every shared service once and starts serving on `listener`.
pub fn run(
    listener: TcpListener,
    store: Store,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let verifier: Arc<dyn CredentialVerifier> =
        Arc::new(StaticCredentials::from(&settings.login));
    let token_service = TokenService::new(&settings.jwt, verifier)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let token_service = web::Data::new(token_service);

    let categories = web::Data::new(store.categories);
    let products = web::Data::new(store.products);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => other.to_string(),
        };
        tracing::debug!("Rejected request body: {}", msg);
        ApiError::BadRequest(msg).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Compress::default())
            .wrap(Cors::permissive())
            .service(routes::index)
            .service(web::scope("/health_check").service(routes::health_check))
            .service(routes::login::handler)
            .service(
                web::scope("/categorias")
                    .service(routes::category::get::list)
                    .service(routes::category::get::item)
                    .service(routes::category::add::item)
                    .service(routes::category::update::item)
                    .service(routes::category::delete::item),
            )
            .service(
                web::scope("/produtos")
                    .service(routes::product::get::list)
                    .service(routes::product::get::item)
                    .service(routes::product::add::item)
                    .service(routes::product::update::item)
                    .service(routes::product::delete::item),
            )
            .app_data(json_config.clone())
            .app_data(token_service.clone())
            .app_data(categories.clone())
            .app_data(products.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
