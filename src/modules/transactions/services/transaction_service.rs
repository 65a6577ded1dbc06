use std::sync::Arc;

use chrono::Utc;

use crate::core::{tax, AppError, Result};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::transactions::models::{
    NewTransaction, PurchaseRequest, PurchaseResponse, TransactionLine, TransactionResponse,
};
use crate::modules::transactions::repositories::TransactionRepository;

/// Sentinel employee code used when the register sends none.
pub const DEFAULT_EMP_CD: &str = "9999999999";
pub const DEFAULT_STORE_CD: &str = "30";
pub const DEFAULT_POS_NO: &str = "90";

/// Service for recording purchases and reading transactions back
pub struct TransactionService {
    products: Arc<dyn ProductRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            products,
            transactions,
        }
    }

    /// Validate a purchase request, compute totals and persist the
    /// transaction header plus its detail lines as one atomic unit.
    ///
    /// Fails before any write on an empty item list, a non-positive
    /// quantity, or a missing product id. The tax-inclusive total is
    /// round-half-up of the tax-exclusive sum, applied once at the header
    /// level.
    pub async fn record_purchase(&self, request: PurchaseRequest) -> Result<PurchaseResponse> {
        if request.items.is_empty() {
            return Err(AppError::validation("items list is empty"));
        }

        for item in &request.items {
            if item.quantity <= 0 {
                return Err(AppError::validation(format!(
                    "quantity must be positive (product id {})",
                    item.prd_id
                )));
            }
        }

        let emp_cd = resolve_code(request.emp_cd.as_deref(), DEFAULT_EMP_CD);
        let store_cd = resolve_code(request.store_cd.as_deref(), DEFAULT_STORE_CD);
        let pos_no = resolve_code(request.pos_no.as_deref(), DEFAULT_POS_NO);

        let mut total_ex: i64 = 0;
        for item in &request.items {
            let product = self
                .products
                .find_by_id(item.prd_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!("Product id {} not found", item.prd_id))
                })?;

            total_ex += product.price * i64::from(item.quantity);
        }

        let total_in = tax::tax_inclusive_total(total_ex);

        let header = NewTransaction {
            datetime: Utc::now().naive_utc(),
            emp_cd,
            store_cd,
            pos_no,
            total_amt: total_in,
            total_amt_ex: total_ex,
        };

        let transaction_id = self.transactions.record(&header, &request.items).await?;

        tracing::info!(
            transaction_id,
            total_amount = total_in,
            total_amount_ex = total_ex,
            lines = request.items.len(),
            "Purchase recorded"
        );

        Ok(PurchaseResponse {
            success: true,
            transaction_id,
            total_amount: total_in,
            total_amount_ex: total_ex,
        })
    }

    /// Reconstruct a prior transaction and its lines in recorded order.
    ///
    /// Each line's `price_in_tax` carries the stored unit price as-is.
    pub async fn get_transaction(&self, trd_id: i64) -> Result<TransactionResponse> {
        let transaction = self
            .transactions
            .find_by_id(trd_id)
            .await?
            .ok_or_else(|| AppError::not_found("transaction not found"))?;

        let details = self.transactions.list_details(trd_id).await?;

        let items = details
            .into_iter()
            .map(|detail| TransactionLine {
                prd_name: detail.prd_name,
                quantity: detail.quantity,
                price_in_tax: detail.prd_price,
                line_amount: detail.line_amount,
            })
            .collect();

        Ok(TransactionResponse {
            transaction_id: transaction.trd_id,
            total_amount_ex: transaction.total_amt_ex,
            total_amount: transaction.total_amt,
            items,
        })
    }
}

/// Blank and absent register codes both fall back to the default.
fn resolve_code(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
