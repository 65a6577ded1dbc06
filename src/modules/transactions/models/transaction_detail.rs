use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Transaction detail row (`trd_dtl`).
///
/// Identified by (`trd_id`, `dtl_id`), where `dtl_id` is the 1-based position
/// of the item in the purchase request. Product fields are denormalized at
/// purchase time so later catalog changes leave history untouched. Owned by
/// its transaction (cascade delete).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionDetail {
    pub trd_id: i64,

    /// Line sequence number, 1..N in request order with no gaps
    pub dtl_id: i64,

    pub prd_id: i64,
    pub prd_code: String,
    pub prd_name: String,

    /// Tax-exclusive unit price at purchase time. The reader surfaces this
    /// value directly as the line's `price_in_tax`.
    pub prd_price: i64,

    pub quantity: i32,

    /// `prd_price * quantity`, tax-exclusive
    pub line_amount: i64,

    /// Tax rate category, fixed "10"
    pub tax_div: String,
}
