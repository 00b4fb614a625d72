//! Handler functions for the achievements API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::AchievementRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub level: String,
    pub year: i32,
    pub photo_url: Option<String>,
}

impl From<AchievementRow> for AchievementResponse {
    fn from(row: AchievementRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            level: row.level,
            year: row.year,
            photo_url: row.photo_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub year: Option<i32>,
    pub photo_url: Option<String>,
}

impl AchievementPayload {
    fn into_row(self, id: Uuid) -> Result<AchievementRow, ApiError> {
        Ok(AchievementRow {
            id,
            title: required(self.title, "title")?,
            description: self.description.unwrap_or_default(),
            level: required(self.level, "level")?,
            year: self.year.unwrap_or_else(|| Utc::now().year()),
            photo_url: self.photo_url,
            created_at: Utc::now(),
        })
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AchievementResponse>>, ApiError> {
    let rows = queries::list_achievements(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AchievementResponse>, ApiError> {
    let row = queries::get_achievement(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AchievementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_achievement(&state.pool, &row).await?;

    Ok((StatusCode::CREATED, Json(AchievementResponse::from(stored))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AchievementPayload>,
) -> Result<Json<AchievementResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_achievement(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_achievement(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
