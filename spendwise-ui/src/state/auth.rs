//! Authentication State
//!
//! Wraps the session store in a signal so route guards and components
//! re-render when the session changes.

use leptos::*;
use std::rc::Rc;

use spendwise::{Session, SessionStore, User};

use super::storage::BrowserStorage;

/// Session store plus a reactive mirror of its state
#[derive(Clone)]
pub struct AuthState {
    store: Rc<SessionStore<BrowserStorage>>,
    session: RwSignal<Session>,
}

impl AuthState {
    fn new() -> Self {
        let store = SessionStore::init(BrowserStorage);
        let session = create_rw_signal(store.snapshot());
        Self {
            store: Rc::new(store),
            session,
        }
    }

    pub fn store(&self) -> &SessionStore<BrowserStorage> {
        &self.store
    }

    /// Reactive; tracks the session signal
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_string))
    }

    /// Token without subscribing the caller
    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_string))
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    /// Re-read the store after it was changed outside this wrapper
    pub fn refresh(&self) {
        self.session.set(self.store.snapshot());
    }

    pub fn logout(&self) {
        self.store.logout();
        self.refresh();
    }
}

/// Restore the session and provide it to all components
pub fn provide_auth_state() {
    provide_context(AuthState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendwise::session::{SessionStorage, TOKEN_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logout_clears_store_and_signal() {
        let runtime = create_runtime();
        SessionStore::init(BrowserStorage).login("tok-2", User::new("ada@example.com", "Ada"));

        let auth = AuthState::new();
        assert!(auth.is_authenticated());
        assert_eq!(auth.token_untracked().as_deref(), Some("tok-2"));

        auth.logout();
        assert!(!auth.is_authenticated());
        assert_eq!(auth.token_untracked(), None);
        assert_eq!(BrowserStorage.get_item(TOKEN_KEY), None);

        runtime.dispose();
    }
}
