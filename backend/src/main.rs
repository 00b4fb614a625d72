//! Main entry point for the school site backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection and outbound service clients, and registers all API
//! routes: the public site endpoints, the auth endpoints, and the
//! admin API behind the session role gate.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod middleware;
mod services;
mod state;
mod utils;

use axum::routing::get;
use axum::Router;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal::{self, unix::SignalKind};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await?;

    let admin = api::admin_router().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        auth::middleware::require_staff,
    ));

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/api/auth", auth::routes::router())
        .nest("/api/admin", admin)
        .nest("/api", api::public_router())
        .layer(middleware::cors())
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn root_handler() -> &'static str {
    "Sekolah API"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
