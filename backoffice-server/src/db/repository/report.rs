//! Report Repository

use async_trait::async_trait;
use shared::models::{Report, ReportDraft};
use sqlx::{PgConnection, PgPool};

use crate::db::RepoResult;

/// Report storage port
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: &ReportDraft) -> RepoResult<Report>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>>;
    async fn find_all(&self) -> RepoResult<Vec<Report>>;
    async fn update(&self, id: i64, report: &ReportDraft) -> RepoResult<Option<Report>>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

const COLUMNS: &str = "id, transaction_type, transaction_category, amount, description";

/// Insert on an existing connection (shared with the stock transaction)
pub(crate) async fn insert_report(
    conn: &mut PgConnection,
    report: &ReportDraft,
) -> RepoResult<Report> {
    let row: Report = sqlx::query_as(&format!(
        r#"
        INSERT INTO reports (transaction_type, transaction_category, amount, description)
        VALUES ($1, $2, $3, $4)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&report.transaction_type)
    .bind(&report.transaction_category)
    .bind(report.amount)
    .bind(&report.description)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

/// PostgreSQL adapter
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn create(&self, report: &ReportDraft) -> RepoResult<Report> {
        let mut conn = self.pool.acquire().await?;
        insert_report(&mut conn, report).await
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>> {
        let row = sqlx::query_as(&format!("SELECT {COLUMNS} FROM reports WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> RepoResult<Vec<Report>> {
        let rows = sqlx::query_as(&format!("SELECT {COLUMNS} FROM reports ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, report: &ReportDraft) -> RepoResult<Option<Report>> {
        let row = sqlx::query_as(&format!(
            r#"
            UPDATE reports
            SET transaction_type = $2, transaction_category = $3, amount = $4, description = $5
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&report.transaction_type)
        .bind(&report.transaction_category)
        .bind(report.amount)
        .bind(&report.description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
