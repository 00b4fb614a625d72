//! Central module for organizing the application's main API endpoints.
//!
//! Each resource gets its own submodule with the same handler/route
//! split. `public_router` carries the read-only site endpoints plus the
//! PPDB intake form; `admin_router` carries the back-office CRUD and is
//! mounted behind the session gate.

pub mod achievements;
pub mod downloads;
pub mod extracurriculars;
pub mod hero_slides;
pub mod media;
pub mod navigation;
pub mod news;
pub mod ppdb;
pub mod settings;
pub mod teachers;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/news", news::routes::public_router())
        .nest("/teachers", teachers::routes::public_router())
        .nest("/achievements", achievements::routes::public_router())
        .nest("/extracurriculars", extracurriculars::routes::public_router())
        .nest("/hero-slides", hero_slides::routes::public_router())
        .nest("/navigation", navigation::routes::public_router())
        .nest("/downloads", downloads::routes::public_router())
        .nest("/settings", settings::routes::public_router())
        .nest("/ppdb", ppdb::routes::public_router())
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/news", news::routes::admin_router())
        .nest("/teachers", teachers::routes::admin_router())
        .nest("/achievements", achievements::routes::admin_router())
        .nest("/extracurriculars", extracurriculars::routes::admin_router())
        .nest("/hero-slides", hero_slides::routes::admin_router())
        .nest("/navigation", navigation::routes::admin_router())
        .nest("/downloads", downloads::routes::admin_router())
        .nest("/settings", settings::routes::admin_router())
        .nest("/ppdb", ppdb::routes::admin_router())
        .nest("/media", media::routes::admin_router())
}
