//! Handler functions for the hero banner API.
//!
//! The public endpoint only serves active slides in sort order; the
//! admin endpoints see everything.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::HeroSlideRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::required;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlideResponse {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
}

impl From<HeroSlideRow> for HeroSlideResponse {
    fn from(row: HeroSlideRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            image_url: row.image_url,
            link_url: row.link_url,
            sort_order: row.sort_order,
            active: row.active,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlidePayload {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl HeroSlidePayload {
    fn into_row(self, id: Uuid) -> Result<HeroSlideRow, ApiError> {
        Ok(HeroSlideRow {
            id,
            title: required(self.title, "title")?,
            subtitle: self.subtitle,
            image_url: required(self.image_url, "imageUrl")?,
            link_url: self.link_url,
            sort_order: self.sort_order,
            active: self.active,
        })
    }
}

pub async fn list_public(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HeroSlideResponse>>, ApiError> {
    let rows = queries::list_active_hero_slides(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn list_admin(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HeroSlideResponse>>, ApiError> {
    let rows = queries::list_hero_slides(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<HeroSlideResponse>, ApiError> {
    let row = queries::get_hero_slide(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HeroSlidePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_hero_slide(&state.pool, &row).await?;

    Ok((StatusCode::CREATED, Json(HeroSlideResponse::from(stored))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<HeroSlidePayload>,
) -> Result<Json<HeroSlideResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_hero_slide(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_hero_slide(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
