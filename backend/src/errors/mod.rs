//! Global application error types and handlers.
//!
//! Every handler funnels failures into `ApiError`, which renders the
//! uniform JSON error bodies: 400 for missing/invalid fields, 404 with
//! the `NOT_FOUND` sentinel on lookup misses, 409 when admission is
//! closed, 401/403 from the session gate, and a generic 500 for
//! database or upstream failures (logged, never echoed to the client).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    #[error("not found")]
    NotFound,

    #[error("registration is closed")]
    RegistrationClosed,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("upstream error: {0}")]
    Upstream(#[from] adapters::AdapterError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "MISSING_FIELD", "field": field }),
            ),
            ApiError::InvalidField(field) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "INVALID_FIELD", "field": field }),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "NOT_FOUND" })),
            ApiError::RegistrationClosed => {
                (StatusCode::CONFLICT, json!({ "error": "PPDB_CLOSED" }))
            }
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "UNAUTHORIZED" }))
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, json!({ "error": "FORBIDDEN" })),
            ApiError::Database(e) => {
                error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "INTERNAL" }),
                )
            }
            ApiError::Upstream(e) => {
                error!("Upstream error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "INTERNAL" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_maps_to_400() {
        let resp = ApiError::MissingField("fullName").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn closed_registration_maps_to_409() {
        let resp = ApiError::RegistrationClosed.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_errors_stay_generic() {
        let resp = ApiError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
