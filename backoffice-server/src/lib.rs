//! Backoffice server
//!
//! REST backend for a small shop: account login, staff clock-in with
//! weather enrichment, the stock sales ledger and the financial report
//! ledger.
//!
//! ```text
//! backoffice-server/src/
//! ├── config.rs      # environment configuration
//! ├── state.rs       # wiring of services and adapters
//! ├── auth/          # JWT, password hashing, role gate
//! ├── weather/       # weather provider port + OpenWeather client
//! ├── db/            # repository ports + PostgreSQL adapters
//! ├── services/      # domain services
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, time, validation
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;
pub mod utils;
pub mod weather;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{CurrentUser, JwtService};
pub use config::Config;
pub use error::{BoxError, ServiceError, ServiceResult};
pub use state::AppState;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($event:expr, $($key:ident = $value:expr),*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            $($key = $value),*
        );
    };
}
