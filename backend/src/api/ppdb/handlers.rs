//! Handler functions for the PPDB admission API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{
    PushSubscriptionRow, RegistrationFileRow, RegistrationRow, RegistrationStatus, WaveRow,
};
use crate::database::queries;
use crate::errors::ApiError;
use crate::services::notifier;
use crate::state::AppState;
use crate::utils::required;

// ==================== WAVES ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveResponse {
    pub id: Uuid,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub quota: i32,
    pub active: bool,
}

impl From<WaveRow> for WaveResponse {
    fn from(row: WaveRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            quota: row.quota,
            active: row.active,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavePayload {
    pub name: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub quota: Option<i32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl WavePayload {
    fn into_row(self, id: Uuid) -> Result<WaveRow, ApiError> {
        let name = required(self.name, "name")?;
        let starts_at = self.starts_at.ok_or(ApiError::MissingField("startsAt"))?;
        let ends_at = self.ends_at.ok_or(ApiError::MissingField("endsAt"))?;

        if ends_at <= starts_at {
            return Err(ApiError::InvalidField("endsAt"));
        }

        Ok(WaveRow {
            id,
            name,
            starts_at,
            ends_at,
            quota: self.quota.unwrap_or(0),
            active: self.active,
        })
    }
}

pub async fn list_open_waves(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WaveResponse>>, ApiError> {
    let rows = queries::list_open_waves(&state.pool, Utc::now()).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn list_waves(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WaveResponse>>, ApiError> {
    let rows = queries::list_waves(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get_wave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WaveResponse>, ApiError> {
    let row = queries::get_wave(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn create_wave(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WavePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = payload.into_row(Uuid::new_v4())?;
    let stored = queries::insert_wave(&state.pool, &row).await?;

    Ok((StatusCode::CREATED, Json(WaveResponse::from(stored))))
}

pub async fn update_wave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<WavePayload>,
) -> Result<Json<WaveResponse>, ApiError> {
    let row = payload.into_row(id)?;
    let stored = queries::update_wave(&state.pool, &row)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stored.into()))
}

pub async fn delete_wave(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_wave(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

// ==================== REGISTRATIONS ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub wave_id: Uuid,
    pub registration_number: String,
    pub full_name: String,
    pub birth_date: String,
    pub gender: String,
    pub origin_school: String,
    pub guardian_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegistrationRow> for RegistrationResponse {
    fn from(row: RegistrationRow) -> Self {
        Self {
            id: row.id,
            wave_id: row.wave_id,
            registration_number: row.registration_number,
            full_name: row.full_name,
            birth_date: row.birth_date,
            gender: row.gender,
            origin_school: row.origin_school,
            guardian_name: row.guardian_name,
            phone: row.phone,
            email: row.email,
            address: row.address,
            status: row.status,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Reduced view for the public status-lookup endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatusResponse {
    pub registration_number: String,
    pub full_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationRow> for RegistrationStatusResponse {
    fn from(row: RegistrationRow) -> Self {
        Self {
            registration_number: row.registration_number,
            full_name: row.full_name,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub origin_school: Option<String>,
    pub guardian_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub wave_id: Option<Uuid>,
}

/// `PPDB-{year}-{serial}`, serial zero-padded to four digits.
pub fn registration_number(year: i32, serial: i64) -> String {
    format!("PPDB-{year}-{serial:04}")
}

pub async fn create_registration(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegistrationPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let full_name = required(payload.full_name, "fullName")?;
    let birth_date = required(payload.birth_date, "birthDate")?;
    let gender = required(payload.gender, "gender")?;
    let origin_school = required(payload.origin_school, "originSchool")?;
    let guardian_name = required(payload.guardian_name, "guardianName")?;
    let phone = required(payload.phone, "phone")?;
    let address = required(payload.address, "address")?;

    let now = Utc::now();
    let open_waves = queries::list_open_waves(&state.pool, now).await?;

    // The form may pin a wave; it still has to be one that is open.
    let wave = match payload.wave_id {
        Some(id) => open_waves.iter().find(|w| w.id == id),
        None => open_waves.first(),
    }
    .ok_or(ApiError::RegistrationClosed)?;

    let year = now.year();
    let serial = queries::count_registrations_for_year(
        &state.pool,
        &format!("PPDB-{year}-"),
    )
    .await?
        + 1;

    let row = RegistrationRow {
        id: Uuid::new_v4(),
        wave_id: wave.id,
        registration_number: registration_number(year, serial),
        full_name,
        birth_date,
        gender,
        origin_school,
        guardian_name,
        phone,
        email: payload.email,
        address,
        status: RegistrationStatus::Pending.as_str().to_string(),
        notes: None,
        created_at: now,
        updated_at: now,
    };

    let stored = queries::insert_registration(&state.pool, &row).await?;
    Ok((StatusCode::CREATED, Json(RegistrationResponse::from(stored))))
}

pub async fn get_registration_by_number(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Result<Json<RegistrationStatusResponse>, ApiError> {
    let row = queries::get_registration_by_number(&state.pool, &number)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

#[derive(Debug, Deserialize)]
pub struct RegistrationFilter {
    pub status: Option<String>,
}

pub async fn list_registrations(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<RegistrationFilter>,
) -> Result<Json<Vec<RegistrationResponse>>, ApiError> {
    let status = match filter.status.as_deref() {
        Some(s) => Some(
            RegistrationStatus::parse(s)
                .ok_or(ApiError::InvalidField("status"))?
                .as_str(),
        ),
        None => None,
    };

    let rows = queries::list_registrations(&state.pool, status).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get_registration(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let row = queries::get_registration(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(row.into()))
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: Option<String>,
    pub notes: Option<String>,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let status = required(payload.status, "status")?;
    let status = RegistrationStatus::parse(&status).ok_or(ApiError::InvalidField("status"))?;

    let stored = queries::update_registration_status(
        &state.pool,
        id,
        status.as_str(),
        payload.notes.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound)?;

    // Best effort; the update above already committed.
    notifier::broadcast_status_change(&state, &stored, status).await;

    Ok(Json(stored.into()))
}

pub async fn delete_registration(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !queries::delete_registration(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

// ==================== REGISTRATION FILES ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFileResponse {
    pub id: Uuid,
    pub registration_id: Uuid,
    pub label: String,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<RegistrationFileRow> for RegistrationFileResponse {
    fn from(row: RegistrationFileRow) -> Self {
        Self {
            id: row.id,
            registration_id: row.registration_id,
            label: row.label,
            file_url: row.file_url,
            uploaded_at: row.uploaded_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFilePayload {
    pub label: Option<String>,
    pub file_url: Option<String>,
}

pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RegistrationFileResponse>>, ApiError> {
    let rows = queries::list_registration_files(&state.pool, id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn attach_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RegistrationFilePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = RegistrationFileRow {
        id: Uuid::new_v4(),
        registration_id: id,
        label: required(payload.label, "label")?,
        file_url: required(payload.file_url, "fileUrl")?,
        uploaded_at: Utc::now(),
    };

    let stored = queries::insert_registration_file(&state.pool, &row).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationFileResponse::from(stored)),
    ))
}

// ==================== PUSH SUBSCRIPTIONS ====================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPayload {
    pub endpoint: Option<String>,
    pub p256dh: Option<String>,
    pub auth: Option<String>,
}

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscriptionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let row = PushSubscriptionRow {
        id: Uuid::new_v4(),
        endpoint: required(payload.endpoint, "endpoint")?,
        p256dh: payload.p256dh,
        auth: payload.auth,
        created_at: Utc::now(),
    };

    queries::upsert_push_subscription(&state.pool, &row).await?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "ok": true }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_number_is_zero_padded() {
        assert_eq!(registration_number(2026, 7), "PPDB-2026-0007");
        assert_eq!(registration_number(2026, 12345), "PPDB-2026-12345");
    }

    #[test]
    fn wave_payload_rejects_inverted_window() {
        let now = Utc::now();
        let payload = WavePayload {
            name: Some("Gelombang 2".to_string()),
            starts_at: Some(now),
            ends_at: Some(now - chrono::Duration::days(1)),
            quota: Some(50),
            active: true,
        };

        assert!(matches!(
            payload.into_row(Uuid::new_v4()),
            Err(ApiError::InvalidField("endsAt"))
        ));
    }

    #[test]
    fn wave_payload_requires_window() {
        let payload = WavePayload {
            name: Some("Gelombang 1".to_string()),
            starts_at: None,
            ends_at: None,
            quota: None,
            active: true,
        };

        assert!(matches!(
            payload.into_row(Uuid::new_v4()),
            Err(ApiError::MissingField("startsAt"))
        ));
    }
}
