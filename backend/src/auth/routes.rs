//! Defines the HTTP routes specifically for authentication.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/me", get(handlers::me))
}
