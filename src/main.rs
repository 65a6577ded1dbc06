use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pos_api::config::Config;
use pos_api::middleware::RequestId;
use pos_api::modules::health::controllers::health_controller;
use pos_api::modules::products::controllers::product_controller;
use pos_api::modules::products::{CatalogService, MySqlProductRepository, ProductRepository};
use pos_api::modules::transactions::controllers::transaction_controller;
use pos_api::modules::transactions::{
    MySqlTransactionRepository, TransactionRepository, TransactionService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pos_api=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting POS API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Wire repositories and services
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(MySqlProductRepository::new(db_pool.clone()));
    let transaction_repo: Arc<dyn TransactionRepository> =
        Arc::new(MySqlTransactionRepository::new(db_pool.clone()));

    let catalog_service = Arc::new(CatalogService::new(product_repo.clone()));
    let transaction_service = Arc::new(TransactionService::new(
        product_repo,
        transaction_repo,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let frontend_origin = config.cors.frontend_origin.clone();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(cors)
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(catalog_service.clone()))
            .app_data(web::Data::new(transaction_service.clone()))
            .configure(product_controller::configure)
            .configure(transaction_controller::configure)
            .configure(health_controller::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
