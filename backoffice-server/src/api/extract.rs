//! Request body extractor
//!
//! Same as [`axum::Json`] but every rejection (syntax, missing fields, wrong
//! content type) becomes a 400 `InvalidRequest` with a plain-text body.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use shared::error::AppError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::invalid_request(format!(
                "Invalid request body: {}",
                rejection.body_text()
            ))),
        }
    }
}
