//! Credential record and store contract.
//!
//! The access token and the session token are a pair: they are written
//! and cleared together, and a record missing either side reads as no
//! credentials at all. The expiry timestamp only means anything while
//! the pair is present.

use serde::{Deserialize, Serialize};

/// Storage key for the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the server-side session token.
pub const SESSION_TOKEN_KEY: &str = "session_token";
/// Storage key for the absolute session expiry (unix seconds).
pub const EXPIRES_AT_KEY: &str = "expires_at";

/// A complete set of stored credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub access_token: String,
    pub session_token: String,
    /// Absolute expiry in unix seconds, when the server reported one.
    pub expires_at: Option<i64>,
}

/// Key/value holder for persisted credentials.
///
/// Absent keys read as `None`; writes and removals are best effort and
/// never fail loudly.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Write the token pair (and expiry, when known) as a unit.
pub fn write_credentials(store: &dyn CredentialStore, record: &CredentialRecord) {
    store.set(ACCESS_TOKEN_KEY, &record.access_token);
    store.set(SESSION_TOKEN_KEY, &record.session_token);
    match record.expires_at {
        Some(expires_at) => store.set(EXPIRES_AT_KEY, &expires_at.to_string()),
        None => store.remove(EXPIRES_AT_KEY),
    }
}

/// Read the stored credentials, requiring the full token pair.
///
/// A record with only one token present is half-state from an
/// interrupted write and reads as no credentials.
pub fn read_credentials(store: &dyn CredentialStore) -> Option<CredentialRecord> {
    let access_token = store.get(ACCESS_TOKEN_KEY)?;
    let session_token = store.get(SESSION_TOKEN_KEY)?;
    Some(CredentialRecord {
        access_token,
        session_token,
        expires_at: stored_expiry(store),
    })
}

/// Read just the expiry timestamp; unparsable values read as absent.
pub fn stored_expiry(store: &dyn CredentialStore) -> Option<i64> {
    store.get(EXPIRES_AT_KEY)?.parse().ok()
}

/// Clear every credential key. Safe to call when nothing is stored.
pub fn clear_credentials(store: &dyn CredentialStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(SESSION_TOKEN_KEY);
    store.remove(EXPIRES_AT_KEY);
}

/// In-memory credential store backing native tests.
#[cfg(any(test, feature = "tests"))]
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(any(test, feature = "tests"))]
impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expires_at: Option<i64>) -> CredentialRecord {
        CredentialRecord {
            access_token: "access-abc".to_string(),
            session_token: "session-xyz".to_string(),
            expires_at,
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = MemoryCredentialStore::default();
        write_credentials(&store, &record(Some(1_700_000_000)));
        assert_eq!(read_credentials(&store), Some(record(Some(1_700_000_000))));
    }

    #[test]
    fn tokens_are_paired() {
        let store = MemoryCredentialStore::default();
        store.set(ACCESS_TOKEN_KEY, "orphan");
        assert_eq!(read_credentials(&store), None);

        let store = MemoryCredentialStore::default();
        store.set(SESSION_TOKEN_KEY, "orphan");
        assert_eq!(read_credentials(&store), None);
    }

    #[test]
    fn clear_removes_every_key() {
        let store = MemoryCredentialStore::default();
        write_credentials(&store, &record(Some(123)));
        clear_credentials(&store);
        assert_eq!(read_credentials(&store), None);
        assert_eq!(stored_expiry(&store), None);
    }

    #[test]
    fn clear_on_empty_store_is_a_noop() {
        let store = MemoryCredentialStore::default();
        clear_credentials(&store);
        assert_eq!(read_credentials(&store), None);
    }

    #[test]
    fn write_without_expiry_drops_stale_deadline() {
        let store = MemoryCredentialStore::default();
        write_credentials(&store, &record(Some(42)));
        write_credentials(&store, &record(None));
        assert_eq!(stored_expiry(&store), None);
    }

    #[test]
    fn garbage_expiry_reads_as_absent() {
        let store = MemoryCredentialStore::default();
        store.set(EXPIRES_AT_KEY, "not-a-number");
        assert_eq!(stored_expiry(&store), None);
    }
}
