use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::transactions::models::PurchaseRequest;
use crate::modules::transactions::services::TransactionService;

/// Record a purchase
/// POST /purchase
pub async fn create_purchase(
    service: web::Data<Arc<TransactionService>>,
    request: web::Json<PurchaseRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.record_purchase(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// Read a recorded transaction back for display/receipt purposes
/// GET /transactions/{trd_id}
pub async fn get_transaction(
    service: web::Data<Arc<TransactionService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let trd_id = path.into_inner();
    let transaction = service.get_transaction(trd_id).await?;

    Ok(HttpResponse::Ok().json(transaction))
}

/// Configure purchase and transaction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/purchase", web::post().to(create_purchase)).service(
        web::scope("/transactions").route("/{trd_id}", web::get().to(get_transaction)),
    );
}
