//! Handler functions for the staff directory API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::TeacherRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub subject: Option<String>,
    pub photo_url: Option<String>,
    pub sort_order: i32,
}

impl From<TeacherRow> for TeacherResponse {
    fn from(row: TeacherRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            position: row.position,
            subject: row.subject,
            photo_url: row.photo_url,
            sort_order: row.sort_order,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPayload {
    pub name: Option<String>,
    pub position: Option<String>,
    pub subject: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl TeacherPayload {
    fn into_row(self, id: Uuid) -> Result<TeacherRow, ApiError> {
        Ok(TeacherRow {
            id,
            name: required(self.name, "name")?,
            position: required(self.position, "position")?,
            subject: self.subject,
            photo_url: self.photo_url,
            sort_order: self.sort_order,
            created_at: Utc::now(),
        })
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeacherResponse>>, ApiError> {
    let rows = queries::list_teachers(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let row = queries::get_teacher(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TeacherPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_teacher(&state.pool, &row).await?;

    Ok((StatusCode::CREATED, Json(TeacherResponse::from(stored))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TeacherPayload>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_teacher(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_teacher(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_name_and_position() {
        let payload = TeacherPayload {
            name: None,
            position: Some("Guru Matematika".to_string()),
            subject: None,
            photo_url: None,
            sort_order: 0,
        };

        assert!(matches!(
            payload.into_row(Uuid::new_v4()),
            Err(ApiError::MissingField("name"))
        ));
    }

    #[test]
    fn payload_maps_to_row() {
        let payload = TeacherPayload {
            name: Some("Ibu Rina".to_string()),
            position: Some("Kepala Sekolah".to_string()),
            subject: Some("IPA".to_string()),
            photo_url: None,
            sort_order: 2,
        };

        let row = payload.into_row(Uuid::new_v4()).unwrap();
        assert_eq!(row.name, "Ibu Rina");
        assert_eq!(row.sort_order, 2);
    }
}
