//! Handler functions for the extracurriculars API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::ExtracurricularRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtracurricularResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub mentor: Option<String>,
    pub schedule: Option<String>,
    pub photo_url: Option<String>,
}

impl From<ExtracurricularRow> for ExtracurricularResponse {
    fn from(row: ExtracurricularRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            mentor: row.mentor,
            schedule: row.schedule,
            photo_url: row.photo_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtracurricularPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub mentor: Option<String>,
    pub schedule: Option<String>,
    pub photo_url: Option<String>,
}

impl ExtracurricularPayload {
    fn into_row(self, id: Uuid) -> Result<ExtracurricularRow, ApiError> {
        Ok(ExtracurricularRow {
            id,
            name: required(self.name, "name")?,
            description: self.description.unwrap_or_default(),
            mentor: self.mentor,
            schedule: self.schedule,
            photo_url: self.photo_url,
            created_at: Utc::now(),
        })
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ExtracurricularResponse>>, ApiError> {
    let rows = queries::list_extracurriculars(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExtracurricularResponse>, ApiError> {
    let row = queries::get_extracurricular(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExtracurricularPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_extracurricular(&state.pool, &row).await?;

    Ok((
        StatusCode::CREATED,
        Json(ExtracurricularResponse::from(stored)),
    ))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExtracurricularPayload>,
) -> Result<Json<ExtracurricularResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_extracurricular(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_extracurricular(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
