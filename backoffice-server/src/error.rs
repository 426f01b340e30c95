//! Unified service-layer error type
//!
//! `ServiceError` bridges storage and infrastructure errors (`RepoError`,
//! `BoxError`) and the API-layer error (`AppError`), so
//! services can use `?` without logging at every call site.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::db::RepoError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error
///
/// - `Db`: storage or infrastructure failure (logged, mapped to InternalError)
/// - `App`: business-rule error passed through to the client
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(what) => ServiceError::App(AppError::not_found(what)),
            RepoError::Duplicate(what) => {
                ServiceError::App(AppError::conflict(format!("{what} already exists")))
            }
            RepoError::Database(_) => ServiceError::Db(Box::new(e)),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_errors_map_to_app_errors() {
        let err: AppError = ServiceError::from(RepoError::NotFound("Stock".into())).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: AppError = ServiceError::from(RepoError::Duplicate("email".into())).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
    }

    #[test]
    fn test_database_error_is_hidden() {
        let err: AppError =
            ServiceError::from(RepoError::Database("connection reset".into())).into();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "Internal server error");
    }
}
