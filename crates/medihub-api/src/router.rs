//! Route definitions for the MediHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(access_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// The passkey access grant protocol: request + verify
fn access_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/doctor/{doctor_id}/request-patient-access",
            post(handlers::access::request_patient_access),
        )
        .route(
            "/doctor/{doctor_id}/verify-passkey",
            post(handlers::access::verify_passkey),
        )
}

/// Patient-facing notification inbox
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/patient/{patient_id}/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/patient/{patient_id}/notifications/{notification_id}/read",
            put(handlers::notification::mark_notification_read),
        )
        .route(
            "/patient/{patient_id}/notifications/{notification_id}",
            delete(handlers::notification::delete_notification),
        )
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration. An empty origin list is
/// treated as allow-any, for local development.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .server
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
