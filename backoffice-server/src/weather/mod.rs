//! Weather enrichment
//!
//! Clock-ins are tagged with the current weather at the caller's
//! coordinates. The provider is a port so the attendance service can run
//! against a fake.

mod openweather;

pub use openweather::OpenWeatherClient;

use async_trait::async_trait;
use thiserror::Error;

/// Condition label stored when the provider answers with no conditions
pub const UNAVAILABLE_CONDITION: &str = "Unavailable";

/// Weather provider errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Base URL missing or unparseable
    #[error("weather provider misconfigured: {0}")]
    Config(String),

    /// Transport failure (connect, timeout, reading the body)
    #[error("weather request failed: {0}")]
    Request(String),

    /// Non-success HTTP status
    #[error("weather provider returned status {status}")]
    Upstream { status: u16 },

    /// Body was not the expected JSON
    #[error("weather response could not be decoded: {0}")]
    Decode(String),
}

/// Current weather lookup
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Main condition label at the given coordinates, e.g. "Clouds"
    async fn current_condition(&self, latitude: f64, longitude: f64)
    -> Result<String, WeatherError>;
}
