//! Handler functions for the downloads API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::DownloadRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub category: String,
}

impl From<DownloadRow> for DownloadResponse {
    fn from(row: DownloadRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            file_url: row.file_url,
            category: row.category,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub category: Option<String>,
}

impl DownloadPayload {
    fn into_row(self, id: Uuid) -> Result<DownloadRow, ApiError> {
        Ok(DownloadRow {
            id,
            title: required(self.title, "title")?,
            description: self.description.unwrap_or_default(),
            file_url: required(self.file_url, "fileUrl")?,
            category: self.category.unwrap_or_else(|| "umum".to_string()),
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DownloadFilter {
    pub category: Option<String>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<DownloadFilter>,
) -> Result<Json<Vec<DownloadResponse>>, ApiError> {
    let rows = queries::list_downloads(&state.pool, filter.category.as_deref()).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let row = queries::get_download(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DownloadPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_download(&state.pool, &row).await?;

    Ok((StatusCode::CREATED, Json(DownloadResponse::from(stored))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DownloadPayload>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_download(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_download(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
