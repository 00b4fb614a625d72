//! Route tables for the PPDB admission API.

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers;
use crate::state::AppState;

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/waves", get(handlers::list_open_waves))
        .route("/registrations", post(handlers::create_registration))
        .route(
            "/registrations/:number",
            get(handlers::get_registration_by_number),
        )
        .route("/subscriptions", post(handlers::subscribe))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/waves",
            get(handlers::list_waves).post(handlers::create_wave),
        )
        .route(
            "/waves/:id",
            get(handlers::get_wave)
                .put(handlers::update_wave)
                .delete(handlers::delete_wave),
        )
        .route("/registrations", get(handlers::list_registrations))
        .route(
            "/registrations/:id",
            get(handlers::get_registration).delete(handlers::delete_registration),
        )
        .route("/registrations/:id/status", patch(handlers::update_status))
        .route(
            "/registrations/:id/files",
            get(handlers::list_files).post(handlers::attach_file),
        )
}
