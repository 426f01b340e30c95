//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod account;
pub mod attendance;
pub mod money;
pub mod report;
pub mod stock;

// Re-exports
pub use account::*;
pub use attendance::*;
pub use report::*;
pub use stock::*;
