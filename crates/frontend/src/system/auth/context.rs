//! Process-wide session state with an explicit owner and lifecycle.
//!
//! Created once at app start (restored from localStorage), mutated only by
//! login/register, logout and the 401 handler, and injected into the HTTP
//! client instead of being read ad hoc.

use leptos::prelude::*;

use super::storage;

#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Restores the session persisted by a previous visit, if any.
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(storage::load_token()),
        }
    }

    /// Reactive: flips the auth-gated routing when the session changes.
    pub fn authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Current bearer token, read without subscribing (request paths must not
    /// become reactive dependencies).
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Login/register succeeded.
    pub fn establish(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    /// Explicit logout.
    pub fn clear(&self) {
        storage::clear_token();
        self.token.set(None);
    }

    /// 401 handler. A no-op when the session is already gone, so a burst of
    /// rejected requests clears it exactly once.
    pub fn invalidate(&self) {
        if self.token.get_untracked().is_some() {
            self.clear();
        }
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}
