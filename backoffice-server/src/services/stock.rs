//! Stock service
//!
//! Recording a sale also books an income entry in the report ledger.

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{ReportDraft, Stock, StockDraft, StockPatch};

use crate::db::repository::StockRepository;
use crate::error::ServiceResult;
use crate::utils::validation::validate_stock_draft;

pub struct StockService {
    repo: Arc<dyn StockRepository>,
}

impl StockService {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }

    /// Insert the stock row and its "product sale" income entry atomically
    pub async fn create(&self, draft: StockDraft) -> ServiceResult<Stock> {
        let total = draft
            .total()
            .ok_or_else(|| AppError::new(ErrorCode::StockTotalOutOfRange))?;
        let entry = ReportDraft::for_sale(&draft.item_name, draft.quantity_sold, total);
        let (stock, report) = self.repo.create_with_report(&draft, &entry).await?;

        tracing::info!(
            stock_id = stock.id,
            report_id = report.id,
            total = %stock.total,
            "Stock sale recorded"
        );
        Ok(stock)
    }

    pub async fn get(&self, id: i64) -> ServiceResult<Stock> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::StockNotFound).into())
    }

    pub async fn list(&self) -> ServiceResult<Vec<Stock>> {
        Ok(self.repo.find_all().await?)
    }

    /// Full replacement; the paired report entry is left as booked
    pub async fn update(&self, id: i64, draft: StockDraft) -> ServiceResult<Stock> {
        self.repo
            .update(id, &draft)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::StockNotFound).into())
    }

    /// Merge the supplied fields over the stored row and recompute the total
    pub async fn patch(&self, id: i64, patch: StockPatch) -> ServiceResult<Stock> {
        let existing = self.get(id).await?;
        let draft = patch.apply(&existing);
        validate_stock_draft(&draft)?;
        self.update(id, draft).await
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::new(ErrorCode::StockNotFound).into());
        }
        Ok(())
    }
}
