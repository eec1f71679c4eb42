//! HTTP surface of the folio site.
//!
//! `app` builds the full router; `export` renders the public pages to files
//! for static hosting.

pub mod export;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Router with every page, the calendar gate and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::pages::router())
        .merge(routes::blog::router())
        .merge(routes::pitches::router())
        .merge(routes::calendar::router())
        .fallback(routes::pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
