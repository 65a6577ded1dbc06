// Products module: catalog lookup over the product master

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Product, ProductResponse};
pub use repositories::{MySqlProductRepository, ProductRepository};
pub use services::CatalogService;
