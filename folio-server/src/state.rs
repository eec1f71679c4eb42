use std::sync::Arc;

use folio_core::Site;

use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Content is read-only after startup
    pub site: Arc<Site>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        AppState {
            site: Arc::new(site),
            sessions: SessionStore::default(),
        }
    }
}
