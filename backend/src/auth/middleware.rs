//! Middleware for protecting the admin API.
//!
//! Applied to the whole `/api/admin` subtree: resolves the session
//! cookie to an account, rejects 401 when the session is missing or
//! stale and 403 when the stored role is not one the back office
//! admits, and attaches the account to the request for handlers.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::service;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn require_staff(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = service::authenticate(&state.pool, request.headers()).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
