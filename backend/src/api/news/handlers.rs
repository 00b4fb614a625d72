//! Handler functions for the news API.
//!
//! Same shape as every other resource: parse the JSON body, check
//! required fields, run one statement against the news table, convert
//! the row to the camelCase response.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::NewsRow;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::utils::{required, slugify};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsRow> for NewsResponse {
    fn from(row: NewsRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            title: row.title,
            excerpt: row.excerpt,
            body: row.body,
            cover_url: row.cover_url,
            published: row.published,
            published_at: row.published_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPayload {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

const DEFAULT_PER_PAGE: i64 = 10;
const MAX_PER_PAGE: i64 = 50;

pub async fn list_public(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<NewsResponse>>, ApiError> {
    let per_page = pagination
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);
    let page = pagination.page.unwrap_or(1).max(1);

    let rows = queries::list_published_news(&state.pool, per_page, (page - 1) * per_page).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get_public(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<NewsResponse>, ApiError> {
    let row = queries::get_published_news_by_slug(&state.pool, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn list_admin(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NewsResponse>>, ApiError> {
    let rows = queries::list_news(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get_admin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<NewsResponse>, ApiError> {
    let row = queries::get_news(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewsPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let title = required(payload.title, "title")?;
    let body = required(payload.body, "body")?;

    let now = Utc::now();
    let row = NewsRow {
        id: Uuid::new_v4(),
        slug: slugify(&title),
        title,
        excerpt: payload.excerpt.unwrap_or_default(),
        body,
        cover_url: payload.cover_url,
        published: payload.published,
        published_at: payload.published.then_some(now),
        created_at: now,
        updated_at: now,
    };

    let stored = queries::insert_news(&state.pool, &row).await?;
    Ok((StatusCode::CREATED, Json(NewsResponse::from(stored))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewsPayload>,
) -> Result<Json<NewsResponse>, ApiError> {
    let title = required(payload.title, "title")?;
    let body = required(payload.body, "body")?;

    let now = Utc::now();
    let row = NewsRow {
        id,
        slug: slugify(&title),
        title,
        excerpt: payload.excerpt.unwrap_or_default(),
        body,
        cover_url: payload.cover_url,
        published: payload.published,
        // candidate timestamp; the statement keeps an existing one
        published_at: payload.published.then_some(now),
        created_at: now,
        updated_at: now,
    };

    let stored = queries::update_news(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_news(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
