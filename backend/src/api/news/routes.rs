//! Route tables for the news API.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::state::AppState;

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_public))
        .route("/:slug", get(handlers::get_public))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_admin).post(handlers::create))
        .route(
            "/:id",
            get(handlers::get_admin)
                .put(handlers::update)
                .delete(handlers::delete),
        )
}
