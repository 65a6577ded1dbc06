use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::products::models::ProductResponse;
use crate::modules::products::repositories::ProductRepository;

/// Service for catalog lookups
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Resolve a scanned code to a product and its tax-inclusive price.
    ///
    /// Accepts both the full 13-digit JAN code and the 6-digit short form.
    /// The returned `price_in_tax` truncates toward zero; transaction totals
    /// round half-up instead.
    pub async fn lookup(&self, code: &str) -> Result<ProductResponse> {
        let product = self
            .products
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        Ok(ProductResponse::from(product))
    }
}
