//! Handler functions for authentication-related API endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::models::{AccountResponse, LoginRequest};
use super::service;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;

    let ttl = state.config.session_ttl_hours;
    let (user, token) = service::login(&state.pool, &username, &password, ttl).await?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, service::session_cookie(&token, ttl))],
        Json(AccountResponse::from(&user)),
    ))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    service::logout(&state.pool, &headers).await?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, service::clear_session_cookie())],
        Json(serde_json::json!({ "ok": true })),
    ))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<AccountResponse>, ApiError> {
    let user = service::authenticate(&state.pool, &headers).await?;

    Ok(Json(AccountResponse::from(&user)))
}
