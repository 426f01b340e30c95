//! Report ledger service

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Report, ReportDraft};

use crate::db::repository::ReportRepository;
use crate::error::ServiceResult;

pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: ReportDraft) -> ServiceResult<Report> {
        let report = self.repo.create(&draft).await?;
        tracing::info!(report_id = report.id, kind = %report.transaction_type, "Report entry created");
        Ok(report)
    }

    pub async fn get(&self, id: i64) -> ServiceResult<Report> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ReportNotFound).into())
    }

    pub async fn list(&self) -> ServiceResult<Vec<Report>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn update(&self, id: i64, draft: ReportDraft) -> ServiceResult<Report> {
        self.repo
            .update(id, &draft)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ReportNotFound).into())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::new(ErrorCode::ReportNotFound).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::InMemoryLedger;
    use rust_decimal::Decimal;

    fn expense(amount: i64) -> ReportDraft {
        ReportDraft {
            transaction_type: "expense".to_string(),
            transaction_category: "utilities".to_string(),
            amount: Decimal::new(amount, 0),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_crud_round() {
        let svc = ReportService::new(Arc::new(InMemoryLedger::default()));

        let created = svc.create(expense(120)).await.unwrap();
        assert_eq!(svc.get(created.id).await.unwrap(), created);

        let updated = svc
            .update(
                created.id,
                ReportDraft {
                    description: Some("electricity".to_string()),
                    ..expense(150)
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.amount, Decimal::new(150, 0));
        assert_eq!(updated.description.as_deref(), Some("electricity"));

        svc.delete(created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_report_is_not_found() {
        let svc = ReportService::new(Arc::new(InMemoryLedger::default()));
        let err = svc.update(5, expense(1)).await.unwrap_err();
        match err {
            ServiceError::App(e) => {
                assert_eq!(e.code, ErrorCode::ReportNotFound);
                assert_eq!(e.http_status(), http::StatusCode::NOT_FOUND);
            }
            ServiceError::Db(e) => panic!("unexpected: {e}"),
        }
    }
}
