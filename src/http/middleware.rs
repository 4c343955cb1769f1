//! Request middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::app::AppState;

use super::error::AppError;

/// Middleware that caps how many login attempts the server accepts per second
pub async fn throttle_login(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if state.login_limiter.check().is_err() {
        warn!("Login attempt throttled");
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}
