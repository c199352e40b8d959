//! Browser-backed credential store.

use cliniq_core::session::credentials::CredentialStore;
use web_sys::Storage;

/// Credential store over `window.sessionStorage`.
///
/// Survives reloads within the same tab and browser profile, never
/// across devices. A blocked or missing storage object degrades to "no
/// credentials": reads come back absent and writes are swallowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentialStore;

/// Get sessionStorage
fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
