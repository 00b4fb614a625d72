//! Route table for admin media uploads.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers;
use crate::state::AppState;

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(handlers::upload))
}
