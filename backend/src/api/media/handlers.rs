//! Handler functions for admin media uploads.
//!
//! The back office never stores file bytes locally: the multipart body
//! is forwarded to the hosting service and only the returned URL is
//! kept (in whatever row the admin attaches it to).

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub url: String,
    pub public_id: String,
}

pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Malformed multipart body: {e}");
        ApiError::InvalidField("file")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            warn!("Failed to read upload body: {e}");
            ApiError::InvalidField("file")
        })?;

        let media = state.media.upload(&file_name, bytes.to_vec()).await?;

        return Ok((
            StatusCode::CREATED,
            Json(MediaResponse {
                url: media.secure_url,
                public_id: media.public_id,
            }),
        ));
    }

    Err(ApiError::MissingField("file"))
}
