#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_core::Site;
use folio_core::config::SiteConfig;
use folio_core::fixture::parse_events;
use folio_server::state::AppState;

pub const PASSPHRASE: &str = "abc123";

const EVENTS: &str = r#"[
    { "id": "tokyo", "title": "Tokyo trip", "start": "2025-01-01", "end": "2025-01-05", "location": "Tokyo", "note": "Ramen tour" },
    { "id": "nyc", "title": "Home", "start": "2020-01-01", "end": "2030-01-01", "location": "NYC", "display": "background" },
    { "id": "lisbon", "title": "Lisbon talk", "start": "2025-02-10", "location": "Lisbon" }
]"#;

/// Site with a known passphrase, a small fixture and "today" pinned to 2025-01-03.
pub fn test_site(passphrase: Option<&str>) -> Site {
    let mut config = SiteConfig::default();
    config.calendar.passphrase = passphrase.map(str::to_string);

    let mut site = Site::load(config).expect("bundled content loads");
    site.events = parse_events(EVENTS).expect("test fixture is valid");
    site.with_today(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap())
}

/// Full router over [`test_site`], sharing one session store per app.
pub fn build_test_app() -> Router {
    folio_server::app(AppState::new(test_site(Some(PASSPHRASE))))
}

pub fn build_unconfigured_app() -> Router {
    folio_server::app(AppState::new(test_site(None)))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(form.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` part of the response's `Set-Cookie`, ready for a `Cookie` header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v: &HeaderValue| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
