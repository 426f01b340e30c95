//! Attendance service: clock-in with weather enrichment

use std::sync::Arc;

use chrono::{Datelike, NaiveTime};
use chrono_tz::Tz;
use shared::error::{AppError, ErrorCode};
use shared::models::{Attendance, WEATHER_NOT_AVAILABLE};

use crate::auth::CurrentUser;
use crate::db::repository::{AttendanceRepository, NewAttendance};
use crate::error::ServiceResult;
use crate::utils::time::{
    SharedClock, is_late, to_business_local, truncate_to_seconds, weekday_name,
};
use crate::weather::WeatherProvider;

/// Validated clock-in input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockIn {
    pub latitude: f64,
    pub longitude: f64,
    pub scheduled_time: NaiveTime,
}

pub struct AttendanceService {
    repo: Arc<dyn AttendanceRepository>,
    weather: Arc<dyn WeatherProvider>,
    clock: SharedClock,
    tz: Tz,
}

impl AttendanceService {
    pub fn new(
        repo: Arc<dyn AttendanceRepository>,
        weather: Arc<dyn WeatherProvider>,
        clock: SharedClock,
        tz: Tz,
    ) -> Self {
        Self {
            repo,
            weather,
            clock,
            tz,
        }
    }

    /// Record a clock-in for `user` at the current business-local time
    ///
    /// A weather lookup failure never fails the clock-in; the record is
    /// stored with `"N/A"` instead.
    pub async fn record_clock_in(
        &self,
        user: &CurrentUser,
        input: ClockIn,
    ) -> ServiceResult<Attendance> {
        let now = self.clock.utc();
        let local = to_business_local(now, self.tz);
        let local = local.date().and_time(truncate_to_seconds(local.time()));

        let weather = match self
            .weather
            .current_condition(input.latitude, input.longitude)
            .await
        {
            Ok(condition) => condition,
            Err(e) => {
                tracing::warn!(error = %e, employee_id = user.id, "Weather lookup failed");
                WEATHER_NOT_AVAILABLE.to_string()
            }
        };

        let late = is_late(local, input.scheduled_time);
        let record = self
            .repo
            .create(NewAttendance {
                employee_id: user.id,
                employee_name: user.name.clone(),
                date: local.date(),
                clock_in_time: local.time(),
                scheduled_time: input.scheduled_time,
                is_late: late,
                weather,
                latitude: input.latitude,
                longitude: input.longitude,
                day_of_week: weekday_name(local.weekday()).to_string(),
                created_at: now.timestamp_millis(),
            })
            .await?;

        tracing::info!(
            attendance_id = record.id,
            employee_id = user.id,
            is_late = late,
            "Clock-in recorded"
        );
        Ok(record)
    }

    pub async fn get(&self, id: i64) -> ServiceResult<Attendance> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::AttendanceNotFound).into())
    }

    pub async fn list(&self) -> ServiceResult<Vec<Attendance>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn update_weather(&self, id: i64, weather: &str) -> ServiceResult<Attendance> {
        self.repo
            .update_weather(id, weather)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::AttendanceNotFound).into())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::new(ErrorCode::AttendanceNotFound).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{
        FailingWeather, FixedWeather, InMemoryAttendance, clock_at, staff_user,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn scheduled(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn clock_in(h: u32, m: u32) -> ClockIn {
        ClockIn {
            latitude: -6.2,
            longitude: 106.8,
            scheduled_time: scheduled(h, m),
        }
    }

    /// 2025-03-10 (a Monday) 01:05:30.750 UTC = 08:05:30 in Jakarta
    fn service(weather: Arc<dyn WeatherProvider>) -> AttendanceService {
        let now = Utc
            .with_ymd_and_hms(2025, 3, 10, 1, 5, 30)
            .unwrap()
            + chrono::Duration::milliseconds(750);
        AttendanceService::new(
            Arc::new(InMemoryAttendance::default()),
            weather,
            clock_at(now),
            chrono_tz::Asia::Jakarta,
        )
    }

    #[tokio::test]
    async fn test_clock_in_after_schedule_is_late() {
        let svc = service(Arc::new(FixedWeather("Clouds")));
        let record = svc
            .record_clock_in(&staff_user(), clock_in(8, 0))
            .await
            .unwrap();

        assert!(record.is_late);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(
            record.clock_in_time,
            NaiveTime::from_hms_opt(8, 5, 30).unwrap()
        );
        assert_eq!(record.day_of_week, "Monday");
        assert_eq!(record.weather, "Clouds");
        assert_eq!(record.employee_name, "Budi");
    }

    #[tokio::test]
    async fn test_clock_in_before_schedule_is_on_time() {
        let svc = service(Arc::new(FixedWeather("Clear")));
        let record = svc
            .record_clock_in(&staff_user(), clock_in(9, 0))
            .await
            .unwrap();
        assert!(!record.is_late);
    }

    #[tokio::test]
    async fn test_clock_in_at_exact_second_is_on_time() {
        let svc = service(Arc::new(FixedWeather("Clear")));
        let input = ClockIn {
            scheduled_time: NaiveTime::from_hms_opt(8, 5, 30).unwrap(),
            ..clock_in(0, 0)
        };
        let record = svc.record_clock_in(&staff_user(), input).await.unwrap();
        assert!(!record.is_late);
    }

    #[tokio::test]
    async fn test_weather_failure_stores_not_available() {
        let svc = service(Arc::new(FailingWeather));
        let record = svc
            .record_clock_in(&staff_user(), clock_in(8, 0))
            .await
            .unwrap();
        assert_eq!(record.weather, "N/A");
    }

    #[tokio::test]
    async fn test_list_newest_first_and_update_weather() {
        let svc = service(Arc::new(FixedWeather("Rain")));
        let first = svc
            .record_clock_in(&staff_user(), clock_in(8, 0))
            .await
            .unwrap();
        let second = svc
            .record_clock_in(&staff_user(), clock_in(8, 0))
            .await
            .unwrap();

        let ids: Vec<i64> = svc.list().await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let updated = svc.update_weather(first.id, "Sunny").await.unwrap();
        assert_eq!(updated.weather, "Sunny");
        assert_eq!(updated.is_late, first.is_late);
        assert_eq!(svc.get(first.id).await.unwrap().weather, "Sunny");
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let svc = service(Arc::new(FixedWeather("Rain")));
        for err in [
            svc.get(42).await.unwrap_err(),
            svc.update_weather(42, "Rain").await.unwrap_err(),
            svc.delete(42).await.unwrap_err(),
        ] {
            match err {
                ServiceError::App(e) => assert_eq!(e.code, ErrorCode::AttendanceNotFound),
                ServiceError::Db(e) => panic!("unexpected: {e}"),
            }
        }
    }
}
