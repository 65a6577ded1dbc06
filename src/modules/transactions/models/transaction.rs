use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Transaction header row (`trd`).
///
/// Created exactly once per purchase; never mutated or deleted afterward.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub trd_id: i64,

    /// Creation timestamp (UTC)
    pub datetime: NaiveDateTime,

    pub emp_cd: String,
    pub store_cd: String,
    pub pos_no: String,

    /// Tax-inclusive total
    pub total_amt: i64,

    /// Tax-exclusive total
    pub total_amt_ex: i64,
}

/// Header values for a transaction about to be recorded; the store assigns
/// the id on insert.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub datetime: NaiveDateTime,
    pub emp_cd: String,
    pub store_cd: String,
    pub pos_no: String,
    pub total_amt: i64,
    pub total_amt_ex: i64,
}

/// One requested item of a purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub prd_id: i64,
    pub quantity: i32,
}

/// Purchase request body
///
/// Blank or absent register codes are replaced by their defaults before the
/// header is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub emp_cd: Option<String>,
    #[serde(default)]
    pub store_cd: Option<String>,
    #[serde(default)]
    pub pos_no: Option<String>,
    pub items: Vec<PurchaseItem>,
}

/// Purchase response body
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub success: bool,
    pub transaction_id: i64,

    /// Tax-inclusive total
    pub total_amount: i64,

    /// Tax-exclusive total
    pub total_amount_ex: i64,
}

/// One line of a read-back transaction.
///
/// `price_in_tax` surfaces the stored unit price verbatim; see
/// [`super::TransactionDetail::prd_price`].
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionLine {
    pub prd_name: String,
    pub quantity: i32,
    pub price_in_tax: i64,
    pub line_amount: i64,
}

/// Transaction read-back response body
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub total_amount_ex: i64,
    pub total_amount: i64,
    pub items: Vec<TransactionLine>,
}
