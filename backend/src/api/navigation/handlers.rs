//! Handler functions for the navigation menu API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::NavigationItemRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItemResponse {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub visible: bool,
}

impl From<NavigationItemRow> for NavigationItemResponse {
    fn from(row: NavigationItemRow) -> Self {
        Self {
            id: row.id,
            label: row.label,
            url: row.url,
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            visible: row.visible,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItemPayload {
    pub label: Option<String>,
    pub url: Option<String>,
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl NavigationItemPayload {
    fn into_row(self, id: Uuid) -> Result<NavigationItemRow, ApiError> {
        Ok(NavigationItemRow {
            id,
            label: required(self.label, "label")?,
            url: required(self.url, "url")?,
            parent_id: self.parent_id,
            sort_order: self.sort_order,
            visible: self.visible,
        })
    }
}

pub async fn list_public(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NavigationItemResponse>>, ApiError> {
    let rows = queries::list_visible_navigation(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn list_admin(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NavigationItemResponse>>, ApiError> {
    let rows = queries::list_navigation(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<NavigationItemResponse>, ApiError> {
    let row = queries::get_navigation_item(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NavigationItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_navigation_item(&state.pool, &row).await?;

    Ok((
        StatusCode::CREATED,
        Json(NavigationItemResponse::from(stored)),
    ))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NavigationItemPayload>,
) -> Result<Json<NavigationItemResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_navigation_item(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_navigation_item(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
