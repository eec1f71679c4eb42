//! Side-project pitch pages

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::routes::page;
use crate::state::AppState;
use crate::views::{self, not_found::Missing};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pitches", get(index))
        .route("/pitches/{slug}", get(pitch))
}

/// GET /pitches - All pitches in file order
async fn index(State(state): State<AppState>) -> Response {
    page(views::pitches::index(&state.site)).into_response()
}

/// GET /pitches/:slug - One pitch page
async fn pitch(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.site.pitches.get(&slug) {
        Some(pitch) => page(views::pitches::pitch(&state.site, pitch)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            page(views::not_found::render(&state.site, Missing::Pitch)),
        )
            .into_response(),
    }
}
