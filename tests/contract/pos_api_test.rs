// HTTP contract for the three endpoints, exercised over the in-memory store:
// status codes and response shapes for lookup, purchase, and read-back.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use helpers::{seed_products, MemoryStore};
use pos_api::modules::products::controllers::product_controller;
use pos_api::modules::products::CatalogService;
use pos_api::modules::transactions::controllers::transaction_controller;
use pos_api::modules::transactions::TransactionService;

macro_rules! pos_app {
    ($store:expr) => {{
        let store = $store;
        let catalog_service = Arc::new(CatalogService::new(Arc::new(store.clone())));
        let transaction_service = Arc::new(TransactionService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        ));

        test::init_service(
            App::new()
                .app_data(web::Data::new(catalog_service))
                .app_data(web::Data::new(transaction_service))
                .configure(product_controller::configure)
                .configure(transaction_controller::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_get_product_by_full_code() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::get()
        .uri("/products/4901681328401")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["code"], "4901681328401");
    assert_eq!(body["name"], "P-B3A12-BK");
    assert_eq!(body["price_ex_tax"], 2000);
    assert_eq!(body["price_in_tax"], 2200);
}

#[actix_web::test]
async fn test_get_product_by_suffix() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::get().uri("/products/328401").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "4901681328401");
}

#[actix_web::test]
async fn test_get_unknown_product_returns_404() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::get()
        .uri("/products/9999999999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_purchase_returns_201_with_totals() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::post()
        .uri("/purchase")
        .set_json(json!({
            "emp_cd": "",
            "store_cd": "",
            "pos_no": "",
            "items": [{"prd_id": 1, "quantity": 3}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_amount_ex"], 6000);
    assert_eq!(body["total_amount"], 6600);
    assert!(body["transaction_id"].as_i64().unwrap() > 0);
}

#[actix_web::test]
async fn test_purchase_with_empty_items_returns_400() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::post()
        .uri("/purchase")
        .set_json(json!({"items": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_purchase_with_unknown_product_returns_404() {
    let store = MemoryStore::with_products(seed_products());
    let app = pos_app!(store.clone());

    let req = test::TestRequest::post()
        .uri("/purchase")
        .set_json(json!({"items": [{"prd_id": 404, "quantity": 1}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    assert_eq!(store.transaction_count(), 0);
    assert_eq!(store.detail_count(), 0);
}

#[actix_web::test]
async fn test_purchase_then_read_back() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::post()
        .uri("/purchase")
        .set_json(json!({"items": [{"prd_id": 1, "quantity": 3}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    let trd_id = created["transaction_id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/transactions/{trd_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["transaction_id"], trd_id);
    assert_eq!(body["total_amount_ex"], 6000);
    assert_eq!(body["total_amount"], 6600);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["prd_name"], "P-B3A12-BK");
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["line_amount"], 6000);
    assert_eq!(items[0]["price_in_tax"], 2000);
}

#[actix_web::test]
async fn test_get_unknown_transaction_returns_404() {
    let app = pos_app!(MemoryStore::with_products(seed_products()));

    let req = test::TestRequest::get().uri("/transactions/777").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
