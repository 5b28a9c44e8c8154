//! `window.localStorage` backend for the session store

use spendwise::session::{SessionStorage, StorageError, StorageResult};

/// Session storage over the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".to_string()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendwise::session::{SessionStore, TOKEN_KEY, USER_KEY};
    use spendwise::User;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_survives_reload() {
        let store = SessionStore::init(BrowserStorage);
        store.login("tok-1", User::new("ada@example.com", "Ada"));
        assert_eq!(BrowserStorage.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));

        let reloaded = SessionStore::init(BrowserStorage);
        assert_eq!(reloaded.token().as_deref(), Some("tok-1"));

        reloaded.logout();
        assert_eq!(BrowserStorage.get_item(TOKEN_KEY), None);
        assert_eq!(BrowserStorage.get_item(USER_KEY), None);
    }
}
