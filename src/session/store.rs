//! Session store
//!
//! The store is created once at startup from whatever durable storage holds,
//! and afterwards only `login` and `logout` change it. All callers share it by
//! reference on a single-threaded event loop, hence `RefCell` rather than a
//! lock.

use std::cell::RefCell;

use super::storage::SessionStorage;
use super::types::{Session, User};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded user profile
pub const USER_KEY: &str = "user";

/// Authentication state plus its durable mirror
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    current: RefCell<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore the session from durable storage.
    ///
    /// A half-written session (token without a readable user, or the
    /// reverse) is discarded and both keys are cleared.
    pub fn init(storage: S) -> Self {
        let token = storage.get_item(TOKEN_KEY);
        let user = storage
            .get_item(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unreadable stored user profile: {}", e);
                    None
                }
            });

        let session = match (token, user) {
            (Some(token), Some(user)) => Session::Authenticated { token, user },
            (None, None) => Session::Anonymous,
            _ => {
                tracing::warn!("Stored session is incomplete, clearing it");
                clear_keys(&storage);
                Session::Anonymous
            }
        };

        tracing::debug!(authenticated = session.is_authenticated(), "Session restored");

        Self {
            storage,
            current: RefCell::new(session),
        }
    }

    /// Replace the current session and persist both keys
    pub fn login(&self, token: impl Into<String>, user: User) {
        let token = token.into();

        if let Err(e) = self.storage.set_item(TOKEN_KEY, &token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set_item(USER_KEY, &raw) {
                    tracing::warn!("Failed to persist user profile: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode user profile: {}", e),
        }

        tracing::info!(email = %user.email, "Signed in");
        *self.current.borrow_mut() = Session::Authenticated { token, user };
    }

    /// Clear the session from memory and durable storage
    pub fn logout(&self) {
        clear_keys(&self.storage);
        *self.current.borrow_mut() = Session::Anonymous;
        tracing::info!("Signed out");
    }

    /// True iff a token is currently held. Never touches the network.
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().token().map(str::to_string)
    }

    pub fn user(&self) -> Option<User> {
        self.current.borrow().user().cloned()
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.current.borrow().clone()
    }

    /// Backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn clear_keys<S: SessionStorage>(storage: &S) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to clear stored {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, StorageError, StorageResult};

    fn ada() -> User {
        User {
            id: Some(7),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = SessionStore::init(MemoryStorage::new());
        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), Session::Anonymous);
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_login_then_logout() {
        let storage = MemoryStorage::new();
        let store = SessionStore::init(&storage);

        store.login("tok-1", ada());
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert!(storage.get_item(USER_KEY).is_some());

        store.logout();
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_empty_strings_still_authenticate() {
        let store = SessionStore::init(MemoryStorage::new());
        store.login("", User::new("", ""));
        assert!(store.is_authenticated());

        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let store = SessionStore::init(MemoryStorage::new());
        store.login("first", User::new("a@b.c", "A"));
        store.login("second", ada());

        assert_eq!(store.token().as_deref(), Some("second"));
        assert_eq!(store.user(), Some(ada()));
    }

    #[test]
    fn test_restores_persisted_session() {
        let storage = MemoryStorage::new();
        SessionStore::init(&storage).login("persisted", ada());

        let restored = SessionStore::init(&storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.token().as_deref(), Some("persisted"));
        assert_eq!(restored.user(), Some(ada()));
    }

    #[test]
    fn test_incomplete_session_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, "orphan").unwrap();

        let store = SessionStore::init(&storage);
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_unreadable_user_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set_item(TOKEN_KEY, "tok").unwrap();
        storage.set_item(USER_KEY, "{not json").unwrap();

        let store = SessionStore::init(&storage);
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }

        fn remove_item(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_still_updates_memory() {
        let store = SessionStore::init(ReadOnlyStorage);

        store.login("tok", ada());
        assert!(store.is_authenticated());

        store.logout();
        assert!(!store.is_authenticated());
    }
}
