//! Handler functions for the site settings API.
//!
//! Settings are served as one flat JSON object and written back as a
//! batch of key/value upserts.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn get_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let rows = queries::list_settings(&state.pool).await?;

    Ok(Json(
        rows.into_iter().map(|row| (row.key, row.value)).collect(),
    ))
}

pub async fn put_all(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BTreeMap<String, String>>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::MissingField("settings"));
    }

    for (key, value) in &payload {
        queries::upsert_setting(&state.pool, key, value).await?;
    }

    let rows = queries::list_settings(&state.pool).await?;
    Ok(Json(
        rows.into_iter().map(|row| (row.key, row.value)).collect(),
    ))
}
