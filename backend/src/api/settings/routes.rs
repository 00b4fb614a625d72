//! Route tables for the site settings API.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::state::AppState;

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(handlers::get_all))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(handlers::get_all).put(handlers::put_all))
}
