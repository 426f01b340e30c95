//! Business services
//!
//! Each service owns the rules for one resource and talks to storage only
//! through the repository ports.

pub mod account;
pub mod attendance;
pub mod report;
pub mod stock;

pub use account::{AccountChanges, AccountService, Credentials, Registration};
pub use attendance::{AttendanceService, ClockIn};
pub use report::ReportService;
pub use stock::StockService;
