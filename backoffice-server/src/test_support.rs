//! In-memory doubles for service and router tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use shared::models::{Account, Attendance, Report, ReportDraft, Role, Stock, StockDraft};

use crate::auth::{CurrentUser, JwtService};
use crate::config::Config;
use crate::db::repository::stock::stored_total;
use crate::db::repository::{
    AccountRepository, AttendanceRepository, NewAccount, NewAttendance, ReportRepository,
    Repositories, StockRepository,
};
use crate::db::{RepoError, RepoResult};
use crate::state::AppState;
use crate::utils::logger::LogFormat;
use crate::utils::time::SharedClock;
use crate::weather::{WeatherError, WeatherProvider};

pub const TEST_JWT_SECRET: &str = "test-secret";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ── Clock ───────────────────────────────────────────────────────────

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn clock_at(now: DateTime<Utc>) -> SharedClock {
    Arc::new(FixedClock(now))
}

/// 2025-03-10 08:00:00 UTC
pub fn fixed_clock() -> SharedClock {
    clock_at(Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap())
}

// ── Weather ─────────────────────────────────────────────────────────

pub struct FixedWeather(pub &'static str);

#[async_trait]
impl WeatherProvider for FixedWeather {
    async fn current_condition(&self, _: f64, _: f64) -> Result<String, WeatherError> {
        Ok(self.0.to_string())
    }
}

pub struct FailingWeather;

#[async_trait]
impl WeatherProvider for FailingWeather {
    async fn current_condition(&self, _: f64, _: f64) -> Result<String, WeatherError> {
        Err(WeatherError::Request("connection refused".to_string()))
    }
}

// ── Accounts ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn create(&self, account: NewAccount) -> RepoResult<Account> {
        let mut rows = lock(&self.rows);
        if rows.iter().any(|a| a.email == account.email) {
            return Err(RepoError::Duplicate("accounts_email_key".to_string()));
        }
        let created = Account {
            id: rows.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            email: account.email,
            password_hash: account.password_hash,
            name: account.name,
            role: account.role,
            created_at: account.created_at,
            updated_at: account.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Account>> {
        Ok(lock(&self.rows).iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        Ok(lock(&self.rows).iter().find(|a| a.email == email).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Account>> {
        Ok(lock(&self.rows).clone())
    }

    async fn update(&self, account: &Account) -> RepoResult<Option<Account>> {
        let mut rows = lock(&self.rows);
        if rows
            .iter()
            .any(|a| a.id != account.id && a.email == account.email)
        {
            return Err(RepoError::Duplicate("accounts_email_key".to_string()));
        }
        let Some(row) = rows.iter_mut().find(|a| a.id == account.id) else {
            return Ok(None);
        };
        *row = account.clone();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() != before)
    }
}

// ── Attendance ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryAttendance {
    rows: Mutex<Vec<Attendance>>,
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendance {
    async fn create(&self, entry: NewAttendance) -> RepoResult<Attendance> {
        let mut rows = lock(&self.rows);
        let created = Attendance {
            id: rows.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            employee_id: entry.employee_id,
            employee_name: entry.employee_name,
            date: entry.date,
            clock_in_time: entry.clock_in_time,
            scheduled_time: entry.scheduled_time,
            is_late: entry.is_late,
            weather: entry.weather,
            latitude: entry.latitude,
            longitude: entry.longitude,
            day_of_week: entry.day_of_week,
            created_at: entry.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Attendance>> {
        Ok(lock(&self.rows).iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Attendance>> {
        let mut rows = lock(&self.rows).clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn update_weather(&self, id: i64, weather: &str) -> RepoResult<Option<Attendance>> {
        let mut rows = lock(&self.rows);
        Ok(rows.iter_mut().find(|a| a.id == id).map(|row| {
            row.weather = weather.to_string();
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() != before)
    }
}

// ── Stock + report ledger ───────────────────────────────────────────

/// Stocks and reports in one store so the paired write can be observed
#[derive(Default)]
pub struct InMemoryLedger {
    stocks: Mutex<Vec<Stock>>,
    reports: Mutex<Vec<Report>>,
    fail_reports: AtomicBool,
}

impl InMemoryLedger {
    /// Make every later report insert fail
    pub fn fail_report_writes(&self) {
        self.fail_reports.store(true, Ordering::SeqCst);
    }

    pub fn reports(&self) -> Vec<Report> {
        lock(&self.reports).clone()
    }

    fn insert_report(&self, draft: &ReportDraft) -> RepoResult<Report> {
        if self.fail_reports.load(Ordering::SeqCst) {
            return Err(RepoError::Database("report insert failed".to_string()));
        }
        let mut reports = lock(&self.reports);
        let report = Report {
            id: reports.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            transaction_type: draft.transaction_type.clone(),
            transaction_category: draft.transaction_category.clone(),
            amount: draft.amount,
            description: draft.description.clone(),
        };
        reports.push(report.clone());
        Ok(report)
    }
}

fn stock_row(id: i64, draft: &StockDraft) -> RepoResult<Stock> {
    Ok(Stock {
        id,
        item_name: draft.item_name.clone(),
        quantity_sold: draft.quantity_sold,
        category: draft.category.clone(),
        unit_price: draft.unit_price,
        total: stored_total(draft)?,
    })
}

#[async_trait]
impl StockRepository for InMemoryLedger {
    async fn create_with_report(
        &self,
        stock: &StockDraft,
        report: &ReportDraft,
    ) -> RepoResult<(Stock, Report)> {
        let mut stocks = lock(&self.stocks);
        let created = stock_row(stocks.iter().map(|s| s.id).max().unwrap_or(0) + 1, stock)?;
        // Stock row is only kept once the report insert succeeded
        let entry = self.insert_report(report)?;
        stocks.push(created.clone());
        Ok((created, entry))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Stock>> {
        Ok(lock(&self.stocks).iter().find(|s| s.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Stock>> {
        Ok(lock(&self.stocks).clone())
    }

    async fn update(&self, id: i64, stock: &StockDraft) -> RepoResult<Option<Stock>> {
        let replacement = stock_row(id, stock)?;
        let mut stocks = lock(&self.stocks);
        Ok(stocks.iter_mut().find(|s| s.id == id).map(|row| {
            *row = replacement;
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut stocks = lock(&self.stocks);
        let before = stocks.len();
        stocks.retain(|s| s.id != id);
        Ok(stocks.len() != before)
    }
}

#[async_trait]
impl ReportRepository for InMemoryLedger {
    async fn create(&self, report: &ReportDraft) -> RepoResult<Report> {
        self.insert_report(report)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>> {
        Ok(lock(&self.reports).iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Report>> {
        Ok(self.reports())
    }

    async fn update(&self, id: i64, report: &ReportDraft) -> RepoResult<Option<Report>> {
        let mut reports = lock(&self.reports);
        Ok(reports.iter_mut().find(|r| r.id == id).map(|row| {
            row.transaction_type = report.transaction_type.clone();
            row.transaction_category = report.transaction_category.clone();
            row.amount = report.amount;
            row.description = report.description.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut reports = lock(&self.reports);
        let before = reports.len();
        reports.retain(|r| r.id != id);
        Ok(reports.len() != before)
    }
}

// ── Wiring ──────────────────────────────────────────────────────────

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        http_port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        weather_api_key: "test-key".to_string(),
        weather_api_base_url: "http://127.0.0.1:9".to_string(),
        weather_timeout: Duration::from_secs(1),
        timezone: chrono_tz::Tz::UTC,
        log_format: LogFormat::Text,
    }
}

/// State over fresh in-memory stores, fixed clock and fixed weather
pub fn test_state() -> AppState {
    let ledger = Arc::new(InMemoryLedger::default());
    let repos = Repositories {
        accounts: Arc::new(InMemoryAccounts::default()),
        attendance: Arc::new(InMemoryAttendance::default()),
        stocks: ledger.clone(),
        reports: ledger,
    };
    AppState::from_parts(&test_config(), repos, Arc::new(FixedWeather("Clear")), fixed_clock())
}

pub fn staff_user() -> CurrentUser {
    CurrentUser {
        id: 7,
        email: "budi@shop.test".to_string(),
        name: "Budi".to_string(),
        role: Role::Staff.as_str().to_string(),
    }
}

/// Signed token for a synthetic account, issued at the fixed clock's instant
pub fn token_for(role: Role) -> String {
    let account = Account {
        id: 1,
        email: format!("{role}@shop.test"),
        password_hash: String::new(),
        name: "Tester".to_string(),
        role,
        created_at: 0,
        updated_at: 0,
    };
    JwtService::new(TEST_JWT_SECRET)
        .issue(&account, fixed_clock().utc())
        .unwrap()
}
