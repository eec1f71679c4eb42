//! Home page, health check, stylesheet and the catch-all 404.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Serialize;

use crate::routes::page;
use crate::state::AppState;
use crate::views::{self, not_found::Missing};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/style.css", get(stylesheet))
}

/// GET / - Home page
async fn home(State(state): State<AppState>) -> Html<String> {
    page(views::home::render(&state.site))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /style.css - Bundled stylesheet
async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        views::STYLESHEET,
    )
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        page(views::not_found::render(&state.site, Missing::Page)),
    )
}
