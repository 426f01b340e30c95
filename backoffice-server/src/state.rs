//! Application state
//!
//! Every service is built once here with its collaborators injected and
//! shared across requests behind `Arc`.

use std::sync::Arc;

use crate::auth::JwtService;
use crate::config::Config;
use crate::db::{self, repository::Repositories};
use crate::error::BoxError;
use crate::services::{AccountService, AttendanceService, ReportService, StockService};
use crate::utils::time::SharedClock;
use crate::weather::{OpenWeatherClient, WeatherProvider};

#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtService>,
    pub clock: SharedClock,
    pub accounts: Arc<AccountService>,
    pub attendance: Arc<AttendanceService>,
    pub stocks: Arc<StockService>,
    pub reports: Arc<ReportService>,
}

impl AppState {
    /// Wire services over explicit adapters
    pub fn from_parts(
        config: &Config,
        repos: Repositories,
        weather: Arc<dyn WeatherProvider>,
        clock: SharedClock,
    ) -> Self {
        let jwt = Arc::new(JwtService::new(&config.jwt_secret));

        Self {
            accounts: Arc::new(AccountService::new(
                repos.accounts,
                jwt.clone(),
                clock.clone(),
            )),
            attendance: Arc::new(AttendanceService::new(
                repos.attendance,
                weather,
                clock.clone(),
                config.timezone,
            )),
            stocks: Arc::new(StockService::new(repos.stocks)),
            reports: Arc::new(ReportService::new(repos.reports)),
            jwt,
            clock,
        }
    }

    /// Production wiring: PostgreSQL, OpenWeather and the system clock
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(config).await?;
        let weather = OpenWeatherClient::new(
            &config.weather_api_base_url,
            config.weather_api_key.clone(),
            config.weather_timeout,
        )?;

        Ok(Self::from_parts(
            config,
            Repositories::postgres(pool),
            Arc::new(weather),
            Arc::new(mockable::DefaultClock),
        ))
    }
}
