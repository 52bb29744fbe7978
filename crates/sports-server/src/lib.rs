//! Sports API Server
//!
//! HTTP surface for the Sport resource plus the infrastructure adapters
//! backing it. `main.rs` wires this library to Shuttle; tests drive
//! [`build_router`] directly over the in-memory repository.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod adapters;
pub mod application;
pub mod config;
pub mod models;
pub mod routes;

use application::SportService;
use config::ServerConfig;
use sports::SportRepository;

/// Application service over whichever repository the process was built with
pub type AppSportService = SportService<dyn SportRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub sport_service: Arc<AppSportService>,
    /// Answer absent lookups with `200 null` instead of `404`
    pub legacy_null_body: bool,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Sports API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router (API, health check, Swagger UI) over `repo`.
pub fn build_router(repo: Arc<dyn SportRepository>, config: &ServerConfig) -> Router {
    let state = AppState {
        sport_service: Arc::new(SportService::new(repo)),
        legacy_null_body: config.legacy_null_body,
    };

    if config.legacy_null_body {
        tracing::warn!("Legacy null-body mode enabled - absent sports answer 200 null");
    }

    let openapi = routes::swagger::SportsApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::sport::router())
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .with_state(state)
}
