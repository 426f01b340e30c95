//! Repository Module
//!
//! One port per table plus its PostgreSQL adapter.

pub mod account;
pub mod attendance;
pub mod report;
pub mod stock;

// Re-exports
pub use account::{AccountRepository, NewAccount, PgAccountRepository};
pub use attendance::{AttendanceRepository, NewAttendance, PgAttendanceRepository};
pub use report::{PgReportRepository, ReportRepository};
pub use stock::{PgStockRepository, StockRepository};

use std::sync::Arc;

use sqlx::PgPool;

/// Every storage port the services need
#[derive(Clone)]
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub stocks: Arc<dyn StockRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl Repositories {
    /// PostgreSQL adapters sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            accounts: Arc::new(PgAccountRepository::new(pool.clone())),
            attendance: Arc::new(PgAttendanceRepository::new(pool.clone())),
            stocks: Arc::new(PgStockRepository::new(pool.clone())),
            reports: Arc::new(PgReportRepository::new(pool)),
        }
    }
}
