//! Server configuration

use std::time::Duration;

use chrono_tz::Tz;

use crate::BoxError;
use crate::utils::logger::LogFormat;

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Pool size
    pub database_max_connections: u32,
    /// HTTP port
    pub http_port: u16,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// OpenWeather API key
    pub weather_api_key: String,
    /// OpenWeather base URL, `/weather` is appended
    pub weather_api_base_url: String,
    /// Per-request timeout for the weather call
    pub weather_timeout: Duration,
    /// Business timezone for clock-in dates and lateness
    pub timezone: Tz,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = match lookup("TIMEZONE").filter(|s| !s.is_empty()) {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| format!("TIMEZONE is not a valid IANA timezone: {name}"))?,
            None => Tz::UTC,
        };

        Ok(Self {
            database_url: require(&lookup, "DATABASE_URL")?,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            http_port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            jwt_secret: require(&lookup, "JWT_SECRET")?,
            weather_api_key: require(&lookup, "WEATHER_API_KEY")?,
            weather_api_base_url: require(&lookup, "WEATHER_API_BASE_URL")?,
            weather_timeout: Duration::from_secs(
                lookup("WEATHER_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_WEATHER_TIMEOUT_SECS),
            ),
            timezone,
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        })
    }
}

/// Required variable: must be set and non-empty
fn require<F>(lookup: &F, name: &str) -> Result<String, BoxError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(format!("{name} must not be empty").into()),
        None => Err(format!("{name} must be set").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_URL", "postgres://localhost/backoffice"),
            ("JWT_SECRET", "test-secret"),
            ("WEATHER_API_KEY", "key"),
            ("WEATHER_API_BASE_URL", "https://api.openweathermap.org/data/2.5"),
        ]
    }

    fn load(map: HashMap<String, String>) -> Result<Config, BoxError> {
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(vars(&required())).unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.timezone, Tz::UTC);
        assert_eq!(config.weather_timeout, Duration::from_secs(10));
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let mut pairs = required();
        pairs.extend([
            ("PORT", "9000"),
            ("TIMEZONE", "Asia/Jakarta"),
            ("WEATHER_TIMEOUT_SECS", "3"),
            ("LOG_FORMAT", "json"),
        ]);
        let config = load(vars(&pairs)).unwrap();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.timezone, chrono_tz::Asia::Jakarta);
        assert_eq!(config.weather_timeout, Duration::from_secs(3));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_required_fails() {
        for missing in ["DATABASE_URL", "JWT_SECRET", "WEATHER_API_KEY", "WEATHER_API_BASE_URL"] {
            let pairs: Vec<_> = required()
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect();
            let err = load(vars(&pairs)).unwrap_err();
            assert!(err.to_string().contains(missing), "{err}");
        }
    }

    #[test]
    fn test_empty_secret_fails() {
        let mut pairs = required();
        pairs.retain(|(k, _)| *k != "JWT_SECRET");
        pairs.push(("JWT_SECRET", "  "));
        let err = load(vars(&pairs)).unwrap_err();
        assert_eq!(err.to_string(), "JWT_SECRET must not be empty");
    }

    #[test]
    fn test_invalid_timezone_fails() {
        let mut pairs = required();
        pairs.push(("TIMEZONE", "Mars/Olympus"));
        assert!(load(vars(&pairs)).is_err());
    }
}
