//! Role gate middleware
//!
//! Validates the `Authorization: Bearer <token>` header, checks the caller's
//! role against the route group's allowed set and injects [`CurrentUser`]
//! into the request extensions.
//!
//! | Failure | Status |
//! |---------|--------|
//! | no Authorization header | 401 NotAuthenticated |
//! | not `Bearer <token>` | 401 TokenInvalid |
//! | bad signature / malformed | 401 TokenInvalid |
//! | expired | 401 TokenExpired |
//! | role not allowed | 403 PermissionDenied |

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;
use shared::models::Role;

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::security_log;
use crate::state::AppState;

/// Routes open to every signed-in role
pub const ALL_ROLES: &[Role] = &[Role::Owner, Role::Staff];

/// Owner-only routes
pub const OWNER_ONLY: &[Role] = &[Role::Owner];

type GateFuture = Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>;

/// Gate a route group to `roles`
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/", get(handler::list))
///     .layer(middleware::from_fn_with_state(state, require_roles(OWNER_ONLY)));
/// ```
pub fn require_roles(
    roles: &'static [Role],
) -> impl Fn(State<AppState>, Request, Next) -> GateFuture + Clone {
    move |State(state): State<AppState>, mut req: Request, next: Next| {
        Box::pin(async move {
            let user = authenticate(&state, &req)?;

            if !user.has_any_role(roles) {
                security_log!(
                    "permission_denied",
                    user_id = user.id,
                    role = user.role.as_str(),
                    uri = req.uri().path()
                );
                return Err(AppError::forbidden("Forbidden: insufficient role"));
            }

            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }) as GateFuture
    }
}

fn authenticate(state: &AppState, req: &Request) -> Result<CurrentUser, AppError> {
    let Some(header) = req.headers().get(http::header::AUTHORIZATION) else {
        security_log!("auth_missing", uri = req.uri().path());
        return Err(AppError::not_authenticated());
    };

    let token = header
        .to_str()
        .ok()
        .and_then(JwtService::extract_from_header)
        .ok_or_else(|| {
            security_log!("auth_malformed", uri = req.uri().path());
            AppError::invalid_token("Authorization header must be 'Bearer <token>'")
        })?;

    match state.jwt.validate_token(token, state.clock.utc()) {
        Ok(claims) => Ok(CurrentUser::from(claims)),
        Err(e) => {
            security_log!(
                "auth_failed",
                error = e.to_string().as_str(),
                uri = req.uri().path()
            );
            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}
