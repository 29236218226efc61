//! Browser-backed storage for the session keys.

use session_core::CredentialStorage;

/// `localStorage`-backed [`CredentialStorage`]. Storage failures (disabled
/// storage, private browsing) degrade to "no value" rather than surfacing
/// errors; the session store then behaves as if nothing was persisted.
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
}

impl CredentialStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
