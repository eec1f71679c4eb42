//! Blog index and post pages

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
        .route("/blog", get(index))
        .route("/blog/{slug}", get(post))
}

/// GET /blog - Published posts, newest first
async fn index(State(state): State<AppState>) -> Response {
    page(views::blog::index(&state.site)).into_response()
}

/// GET /blog/:slug - One post, or the not-found view linking back to /blog
async fn post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.site.blog.get(&slug) {
        Some(post) => page(views::blog::post(&state.site, post)).into_response(),
        None => {
            tracing::debug!(%slug, "Unknown blog post");
            (
                StatusCode::NOT_FOUND,
                page(views::not_found::render(&state.site, Missing::Post)),
            )
                .into_response()
        }
    }
}
