pub mod category;
pub mod health_checks;
pub mod login;
pub mod product;

pub use health_checks::*;

use actix_web::get;

#[get("/")]
pub async fn index() -> &'static str {
    "Catálogo de Produtos - 2025"
}
