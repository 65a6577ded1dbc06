use async_trait::async_trait;
use sqlx::{MySql, MySqlPool};

use crate::core::{tax, AppError, Result};
use crate::modules::products::models::Product;
use crate::modules::transactions::models::{NewTransaction, PurchaseItem, Transaction, TransactionDetail};

/// Persistence for transaction headers and their detail lines.
///
/// Injected into the services as `Arc<dyn TransactionRepository>` so the core
/// logic can be exercised against an in-memory store in tests.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Record a transaction header and one detail line per item, atomically.
    ///
    /// Each item's product is re-resolved inside the store transaction and
    /// its code, name and price are denormalized onto the detail line.
    /// Details are numbered 1..N in `items` order. If any step fails after
    /// the header insert, everything is rolled back; partial persistence is
    /// never observable. Returns the assigned transaction id.
    async fn record(&self, header: &NewTransaction, items: &[PurchaseItem]) -> Result<i64>;

    /// Fetch a transaction header by id.
    async fn find_by_id(&self, trd_id: i64) -> Result<Option<Transaction>>;

    /// Fetch all detail lines of a transaction, ordered by `dtl_id`.
    async fn list_details(&self, trd_id: i64) -> Result<Vec<TransactionDetail>>;
}

/// MySQL-backed transaction repository
pub struct MySqlTransactionRepository {
    pool: MySqlPool,
}

impl MySqlTransactionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert_header(
        tx: &mut sqlx::Transaction<'_, MySql>,
        header: &NewTransaction,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO trd (datetime, emp_cd, store_cd, pos_no, total_amt, total_amt_ex)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(header.datetime)
        .bind(&header.emp_cd)
        .bind(&header.store_cd)
        .bind(&header.pos_no)
        .bind(header.total_amt)
        .bind(header.total_amt_ex)
        .execute(&mut **tx)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn insert_detail(
        tx: &mut sqlx::Transaction<'_, MySql>,
        trd_id: i64,
        dtl_id: i64,
        product: &Product,
        quantity: i32,
    ) -> Result<()> {
        let line_amount = product.price * i64::from(quantity);

        sqlx::query(
            r#"
            INSERT INTO trd_dtl
                (trd_id, dtl_id, prd_id, prd_code, prd_name, prd_price,
                 quantity, line_amount, tax_div)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trd_id)
        .bind(dtl_id)
        .bind(product.prd_id)
        .bind(&product.code)
        .bind(&product.name)
        .bind(product.price)
        .bind(quantity)
        .bind(line_amount)
        .bind(tax::TAX_DIVISION)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for MySqlTransactionRepository {
    async fn record(&self, header: &NewTransaction, items: &[PurchaseItem]) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let trd_id = Self::insert_header(&mut tx, header).await?;

        for (index, item) in items.iter().enumerate() {
            // Fresh read inside the transaction, guarding against catalog
            // changes between the caller's totals pass and this insert.
            let product = sqlx::query_as::<_, Product>(
                r#"
                SELECT prd_id, code, name, price
                FROM prd_mst
                WHERE prd_id = ?
                "#,
            )
            .bind(item.prd_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product id {} not found", item.prd_id)))?;

            let dtl_id = index as i64 + 1;
            Self::insert_detail(&mut tx, trd_id, dtl_id, &product, item.quantity).await?;
        }

        tx.commit().await?;

        Ok(trd_id)
    }

    async fn find_by_id(&self, trd_id: i64) -> Result<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT trd_id, datetime, emp_cd, store_cd, pos_no, total_amt, total_amt_ex
            FROM trd
            WHERE trd_id = ?
            "#,
        )
        .bind(trd_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn list_details(&self, trd_id: i64) -> Result<Vec<TransactionDetail>> {
        let details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT trd_id, dtl_id, prd_id, prd_code, prd_name, prd_price,
                   quantity, line_amount, tax_div
            FROM trd_dtl
            WHERE trd_id = ?
            ORDER BY dtl_id
            "#,
        )
        .bind(trd_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }
}
