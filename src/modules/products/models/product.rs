use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::tax;

/// Product master row (`prd_mst`).
///
/// Read-only at runtime; rows are created by the `seed` binary. A later
/// price change never alters already-recorded transaction details, which
/// carry their own denormalized copy of these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub prd_id: i64,

    /// 13-character JAN code, unique
    pub code: String,

    /// Display name, unique, may be non-ASCII
    pub name: String,

    /// Tax-exclusive price in whole yen
    pub price: i64,
}

/// Catalog lookup response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price_ex_tax: i64,
    pub price_in_tax: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let price_in_tax = tax::price_in_tax(product.price);
        ProductResponse {
            id: product.prd_id,
            code: product.code,
            name: product.name,
            price_ex_tax: product.price,
            price_in_tax,
        }
    }
}
