use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::products::models::Product;

/// Read access to the product master.
///
/// Injected into the services as `Arc<dyn ProductRepository>` so the core
/// logic can be exercised against an in-memory store in tests.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by surrogate id.
    async fn find_by_id(&self, prd_id: i64) -> Result<Option<Product>>;

    /// Find a product whose code matches `code` exactly, or whose last six
    /// characters match it (short-form in-store codes vs. full JAN codes).
    ///
    /// If two products share a six-character suffix, which row is returned
    /// is implementation-defined; the store picks one.
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>>;
}

/// MySQL-backed product repository
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, prd_id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT prd_id, code, name, price
            FROM prd_mst
            WHERE prd_id = ?
            "#,
        )
        .bind(prd_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT prd_id, code, name, price
            FROM prd_mst
            WHERE code = ? OR RIGHT(code, 6) = ?
            LIMIT 1
            "#,
        )
        .bind(code)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
