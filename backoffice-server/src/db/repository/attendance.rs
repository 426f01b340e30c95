//! Attendance Repository

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use shared::models::Attendance;
use sqlx::PgPool;

use crate::db::RepoResult;

/// Clock-in row to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub employee_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub clock_in_time: NaiveTime,
    pub scheduled_time: NaiveTime,
    pub is_late: bool,
    pub weather: String,
    pub latitude: f64,
    pub longitude: f64,
    pub day_of_week: String,
    pub created_at: i64,
}

/// Attendance storage port
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn create(&self, entry: NewAttendance) -> RepoResult<Attendance>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Attendance>>;
    /// Newest first
    async fn find_all(&self) -> RepoResult<Vec<Attendance>>;
    async fn update_weather(&self, id: i64, weather: &str) -> RepoResult<Option<Attendance>>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

const COLUMNS: &str = "id, employee_id, employee_name, date, clock_in_time, scheduled_time, \
                       is_late, weather, latitude, longitude, day_of_week, created_at";

/// PostgreSQL adapter
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn create(&self, entry: NewAttendance) -> RepoResult<Attendance> {
        let row: Attendance = sqlx::query_as(&format!(
            r#"
            INSERT INTO attendances (
                employee_id, employee_name, date, clock_in_time, scheduled_time,
                is_late, weather, latitude, longitude, day_of_week, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(entry.employee_id)
        .bind(&entry.employee_name)
        .bind(entry.date)
        .bind(entry.clock_in_time)
        .bind(entry.scheduled_time)
        .bind(entry.is_late)
        .bind(&entry.weather)
        .bind(entry.latitude)
        .bind(entry.longitude)
        .bind(&entry.day_of_week)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Attendance>> {
        let row = sqlx::query_as(&format!("SELECT {COLUMNS} FROM attendances WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> RepoResult<Vec<Attendance>> {
        let rows = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM attendances ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update_weather(&self, id: i64, weather: &str) -> RepoResult<Option<Attendance>> {
        let row = sqlx::query_as(&format!(
            "UPDATE attendances SET weather = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(weather)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM attendances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
