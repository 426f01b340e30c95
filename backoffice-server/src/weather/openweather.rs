//! Reqwest-backed OpenWeather adapter
//!
//! One GET per call with an explicit timeout. No retry, no cache.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{UNAVAILABLE_CONDITION, WeatherError, WeatherProvider};

#[derive(Debug, Deserialize)]
struct CurrentWeatherDto {
    #[serde(default)]
    weather: Vec<ConditionDto>,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    main: String,
}

/// OpenWeather current-weather client
pub struct OpenWeatherClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl OpenWeatherClient {
    /// `base_url` is the API root; `/weather` is appended.
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, WeatherError> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(WeatherError::Config("base URL is empty".to_string()));
        }
        let endpoint = Url::parse(&format!("{base}/weather"))
            .map_err(|e| WeatherError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Config(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_condition(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, WeatherError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;
        parse_condition(&body)
    }
}

fn parse_condition(body: &[u8]) -> Result<String, WeatherError> {
    let decoded: CurrentWeatherDto =
        serde_json::from_slice(body).map_err(|e| WeatherError::Decode(e.to_string()))?;
    Ok(decoded
        .weather
        .into_iter()
        .next()
        .map(|c| c.main)
        .unwrap_or_else(|| UNAVAILABLE_CONDITION.to_string()))
}
