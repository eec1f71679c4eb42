//! Calendar pages behind the passphrase gate

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use folio_core::calendar::MonthGrid;
use folio_core::date_range::parse_month;
use folio_core::event::Event;
use folio_core::gate::GateOutcome;

use crate::routes::{AppError, page};
use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(show))
        .route("/calendar/unlock", post(unlock))
        .route("/calendar/lock", post(lock))
        .route("/calendar/events.json", get(events_json))
}

/// Calendar pages must never be cached by the browser or a proxy
fn no_store(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

#[derive(Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

/// GET /calendar - Calendar if this session is unlocked, passphrase prompt otherwise
async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MonthQuery>,
) -> Response {
    let handle = state.sessions.resolve(&headers).await;
    let site = &state.site;

    if !handle.session.is_calendar_unlocked() {
        return no_store(page(views::gate::render(site, None)).into_response());
    }

    let today = site.today();
    let requested = query.month.as_deref().and_then(|raw| {
        match parse_month(raw).and_then(|month| site.month_grid(month)) {
            Ok(grid) => Some(grid),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring month parameter");
                None
            }
        }
    });

    let grid = match requested {
        Some(grid) => grid,
        None => match site.month_grid(today) {
            Ok(grid) => grid,
            Err(e) => return no_store(AppError::from(e).into_response()),
        },
    };

    let upcoming = site.upcoming();

    no_store(page(views::calendar::render(site, &grid, &upcoming)).into_response())
}

#[derive(Deserialize)]
pub struct UnlockForm {
    #[serde(default)]
    pub passphrase: String,
}

/// POST /calendar/unlock - Check the passphrase
async fn unlock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<UnlockForm>,
) -> Response {
    let mut handle = state.sessions.resolve(&headers).await;

    match state.site.gate.submit(&mut handle.session, &form.passphrase) {
        GateOutcome::Granted => {
            state.sessions.save(&handle).await;
            tracing::info!("Calendar unlocked for a session");

            let mut response = Redirect::to("/calendar").into_response();
            if let Some(cookie) = handle.set_cookie() {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            no_store(response)
        }
        outcome @ GateOutcome::Denied => {
            let body = page(views::gate::render(&state.site, outcome.message()));
            no_store((StatusCode::UNAUTHORIZED, body).into_response())
        }
    }
}

/// POST /calendar/lock - Sign out of the calendar
async fn lock(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut handle = state.sessions.resolve(&headers).await;

    if !handle.is_new {
        handle.session.lock_calendar();
        state.sessions.save(&handle).await;
    }

    no_store(Redirect::to("/calendar").into_response())
}

#[derive(Serialize)]
pub struct CalendarSummary<'a> {
    pub today: NaiveDate,
    pub current: Option<&'a Event>,
    pub upcoming: Vec<&'a Event>,
    pub month: String,
}

/// GET /calendar/events.json - Current location and upcoming events
async fn events_json(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.sessions.resolve(&headers).await;
    if !handle.session.is_calendar_unlocked() {
        let locked = AppError::new(StatusCode::UNAUTHORIZED, "calendar is locked");
        return no_store(locked.into_response());
    }

    let site = &state.site;
    let today = site.today();
    let summary = CalendarSummary {
        today,
        current: site.current_event(),
        upcoming: site.upcoming().iter().collect(),
        month: MonthGrid::key(today),
    };

    no_store(Json(summary).into_response())
}
