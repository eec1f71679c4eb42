//! Per-visitor sessions for the calendar gate.
//!
//! A session cookie (no `Max-Age`, so it dies with the browser session)
//! carries a random id; the gate flag itself stays on the server.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, HeaderValue, header};
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::gate::Session;

/// Fixed cookie name holding the session id.
pub const SESSION_COOKIE: &str = "folio_session";

/// Sessions idle longer than this are forgotten on the next write.
const SESSION_IDLE_LIMIT: Duration = Duration::from_secs(7 * 24 * 60 * 60);

struct Entry {
    session: Session,
    touched: Instant,
}

/// In-memory session map shared by all requests
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

/// A session resolved for one request
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    pub session: Session,
    /// True when the visitor had no valid cookie; the response must set one
    pub is_new: bool,
}

impl SessionHandle {
    /// `Set-Cookie` value for a new session, `None` otherwise.
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        self.is_new.then(|| cookie_header(self.id))
    }
}

impl SessionStore {
    /// Session named by the request cookie, or a fresh unsaved one.
    pub async fn resolve(&self, headers: &HeaderMap) -> SessionHandle {
        if let Some(id) = session_id(headers) {
            if let Some(entry) = self.inner.read().await.get(&id) {
                return SessionHandle {
                    id,
                    session: entry.session.clone(),
                    is_new: false,
                };
            }
        }

        SessionHandle {
            id: Uuid::new_v4(),
            session: Session::new(),
            is_new: true,
        }
    }

    /// Persist the session and prune idle ones.
    pub async fn save(&self, handle: &SessionHandle) {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;

        sessions.retain(|_, entry| now.duration_since(entry.touched) < SESSION_IDLE_LIMIT);
        sessions.insert(
            handle.id,
            Entry {
                session: handle.session.clone(),
                touched: now,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Session id from the `Cookie` header, if present and well-formed.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

fn cookie_header(id: Uuid) -> HeaderValue {
    let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn parses_session_cookie_among_others() {
        let id = Uuid::new_v4();
        let headers = headers_with_cookie(&format!("theme=dark; {SESSION_COOKIE}={id}; x=1"));
        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn ignores_malformed_or_missing_cookie() {
        assert_eq!(session_id(&HeaderMap::new()), None);
        assert_eq!(session_id(&headers_with_cookie("folio_session=not-a-uuid")), None);
        assert_eq!(session_id(&headers_with_cookie("other=1")), None);
    }

    #[test]
    fn cookie_is_a_session_cookie() {
        let value = cookie_header(Uuid::nil());
        let value = value.to_str().unwrap();
        assert!(value.starts_with("folio_session="));
        assert!(value.contains("HttpOnly"));
        assert!(!value.contains("Max-Age"));
        assert!(!value.contains("Expires"));
    }

    #[tokio::test]
    async fn unknown_cookie_gets_a_fresh_session() {
        let store = SessionStore::default();
        let headers = headers_with_cookie(&format!("{SESSION_COOKIE}={}", Uuid::new_v4()));

        let handle = store.resolve(&headers).await;
        assert!(handle.is_new);
        assert!(handle.set_cookie().is_some());
        assert!(!handle.session.is_calendar_unlocked());
    }

    #[tokio::test]
    async fn saved_session_is_found_again() {
        let store = SessionStore::default();
        let gate = folio_core::gate::Gate::new(Some("abc123".into()));

        let mut handle = store.resolve(&HeaderMap::new()).await;
        gate.submit(&mut handle.session, "abc123");
        store.save(&handle).await;

        let headers = headers_with_cookie(&format!("{SESSION_COOKIE}={}", handle.id));
        let again = store.resolve(&headers).await;
        assert!(!again.is_new);
        assert!(again.set_cookie().is_none());
        assert!(again.session.is_calendar_unlocked());
        assert_eq!(store.len().await, 1);
    }
}
