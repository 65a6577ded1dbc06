use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::services::CatalogService;

/// Look up a product by code
/// GET /products/{code}
pub async fn get_product(
    service: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let product = service.lookup(&code).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/products").route("/{code}", web::get().to(get_product)));
}
