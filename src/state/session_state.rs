// ============================================================================
// SESSION STATE - ¿Está autenticada esta pestaña?
// ============================================================================

use std::cell::Cell;

use crate::utils::cookies::has_session_cookie;

/// Per-tab authentication flag
#[derive(Debug, Default)]
pub struct SessionState {
    authenticated: Cell<bool>,
}

impl SessionState {
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated: Cell::new(authenticated),
        }
    }

    /// Startup probe against a `document.cookie` string
    pub fn from_cookie(cookie_header: &str) -> Self {
        Self::new(has_session_cookie(cookie_header))
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.authenticated.set(authenticated);
    }
}
