//! Stock Repository
//!
//! A recorded sale and its income entry in the report ledger are written
//! together: either both rows exist or neither does.

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::models::{Report, ReportDraft, Stock, StockDraft};
use sqlx::PgPool;

use super::report::insert_report;
use crate::db::{RepoError, RepoResult};

/// Stock storage port
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Insert the stock row and its paired report entry in one transaction
    async fn create_with_report(
        &self,
        stock: &StockDraft,
        report: &ReportDraft,
    ) -> RepoResult<(Stock, Report)>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Stock>>;
    async fn find_all(&self) -> RepoResult<Vec<Stock>>;
    /// Full replacement, total recomputed from the draft
    async fn update(&self, id: i64, stock: &StockDraft) -> RepoResult<Option<Stock>>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

const COLUMNS: &str = "id, item_name, quantity_sold, category, unit_price, total";

/// Total to store for `stock`; out-of-range drafts never reach SQL
pub(crate) fn stored_total(stock: &StockDraft) -> RepoResult<Decimal> {
    stock.total().ok_or_else(|| {
        RepoError::Database(format!(
            "total of {} x {} is out of range",
            stock.quantity_sold, stock.unit_price
        ))
    })
}

/// PostgreSQL adapter
#[derive(Clone)]
pub struct PgStockRepository {
    pool: PgPool,
}

impl PgStockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn create_with_report(
        &self,
        stock: &StockDraft,
        report: &ReportDraft,
    ) -> RepoResult<(Stock, Report)> {
        let total = stored_total(stock)?;
        let mut tx = self.pool.begin().await?;

        let created: Stock = sqlx::query_as(&format!(
            r#"
            INSERT INTO stocks (item_name, quantity_sold, category, unit_price, total)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&stock.item_name)
        .bind(stock.quantity_sold)
        .bind(&stock.category)
        .bind(stock.unit_price)
        .bind(total)
        .fetch_one(&mut *tx)
        .await?;

        // Dropping `tx` on error rolls the stock insert back
        let entry = insert_report(&mut tx, report).await?;

        tx.commit().await?;
        Ok((created, entry))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Stock>> {
        let row = sqlx::query_as(&format!("SELECT {COLUMNS} FROM stocks WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> RepoResult<Vec<Stock>> {
        let rows = sqlx::query_as(&format!("SELECT {COLUMNS} FROM stocks ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, stock: &StockDraft) -> RepoResult<Option<Stock>> {
        let total = stored_total(stock)?;
        let row = sqlx::query_as(&format!(
            r#"
            UPDATE stocks
            SET item_name = $2, quantity_sold = $3, category = $4, unit_price = $5, total = $6
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&stock.item_name)
        .bind(stock.quantity_sold)
        .bind(&stock.category)
        .bind(stock.unit_price)
        .bind(total)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM stocks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
