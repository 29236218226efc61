//! Process-wide session state: the current credential, its derived identity,
//! and the durable keys the console relies on between visits.
//!
//! [`SessionStore`] is plain data so the UI layer can hold it behind a
//! reactive signal. Durable storage is reached through [`CredentialStorage`]
//! and the current time is supplied by callers, which keeps every operation
//! deterministic under test. Concurrent writers (two tabs) are not
//! coordinated: last write wins.

use crate::claims::{self, DecodeError, IdentityClaims};
use std::cell::RefCell;
use std::collections::HashMap;

/// Durable key for the raw credential string.
pub const CREDENTIAL_KEY: &str = "jwt";
/// Durable key for the last-active navigation panel hint.
pub const PANEL_KEY: &str = "panel";
/// Panel hint written when a credential is stored.
pub const DEFAULT_PANEL: &str = "log";

/// Synchronous key-value storage for the session keys. Browser code backs
/// this with `localStorage`; tests use [`MemoryStorage`].
pub trait CredentialStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`CredentialStorage`] backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl CredentialStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Lightweight marker that a credential has been installed. Authentication
/// checks look only at its presence; expiry is evaluated by
/// [`SessionStore::decode_claims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub credential: String,
}

/// Claims produced by [`SessionStore::decode_claims`], together with whether
/// the credential had already expired when it was read. When `expired` is
/// set, the store has logged itself out by the time this value is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedClaims {
    pub claims: IdentityClaims,
    pub expired: bool,
}

/// Single source of truth for "is the user authenticated".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    credential: Option<String>,
    identity: Option<Identity>,
    ready: bool,
    login_redirect: bool,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from durable storage. Returns the installed credential, if
    /// any, so the caller can attach it as the default bearer header. The
    /// store reports ready afterwards either way; consumers must not trust
    /// its contents before then.
    pub fn initialize(&mut self, storage: &dyn CredentialStorage) -> Option<String> {
        let persisted = storage.get(CREDENTIAL_KEY);
        if let Some(credential) = &persisted {
            self.credential = Some(credential.clone());
            self.identity = Some(Identity {
                credential: credential.clone(),
            });
        }
        self.ready = true;
        persisted
    }

    /// Install a credential as current, superseding any previous one, and
    /// persist it together with the panel hint.
    pub fn store(&mut self, storage: &dyn CredentialStorage, credential: &str) {
        storage.set(CREDENTIAL_KEY, credential);
        storage.set(PANEL_KEY, DEFAULT_PANEL);
        self.credential = Some(credential.to_string());
        self.identity = Some(Identity {
            credential: credential.to_string(),
        });
    }

    /// Decode the given credential, or the current one when `given` is
    /// `None`.
    ///
    /// An expired credential still yields its decoded claims, but the store
    /// has logged itself out by the time the call returns; the caller is
    /// expected to surface the session-expired notification and treat the
    /// session as over.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Missing`] when no credential is available, or
    /// the decoding failure for a malformed token. Either way the caller must
    /// treat the session as not authenticated rather than crash.
    pub fn decode_claims(
        &mut self,
        storage: &dyn CredentialStorage,
        given: Option<&str>,
        now_unix_seconds: i64,
    ) -> Result<DecodedClaims, DecodeError> {
        let token = match given {
            Some(token) => token.to_string(),
            None => self.credential.clone().ok_or(DecodeError::Missing)?,
        };
        let claims = claims::decode(&token)?;

        let expired = claims.is_expired(now_unix_seconds);
        if expired {
            self.logout(storage);
        }
        Ok(DecodedClaims { claims, expired })
    }

    /// Presence check only: a store can still report authenticated after its
    /// credential has silently expired, until something calls
    /// [`Self::decode_claims`].
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Clear durable and in-memory state and raise the login redirect signal.
    /// Calling this when already logged out changes nothing further.
    pub fn logout(&mut self, storage: &dyn CredentialStorage) {
        storage.remove(CREDENTIAL_KEY);
        self.credential = None;
        self.identity = None;
        self.login_redirect = true;
    }

    /// Consume the pending redirect-to-login signal.
    pub fn take_login_redirect(&mut self) -> bool {
        std::mem::take(&mut self.login_redirect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64ct::{Base64UrlUnpadded, Encoding};
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn token_with_exp(exp: i64) -> String {
        let header = Base64UrlUnpadded::encode_string(
            json!({ "alg": "HS256", "typ": "JWT" }).to_string().as_bytes(),
        );
        let payload = Base64UrlUnpadded::encode_string(
            json!({ "email": "ana@example.test", "exp": exp })
                .to_string()
                .as_bytes(),
        );
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn stored_credential_round_trips_byte_for_byte() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();

        store.store(&storage, "abc.def.ghi");
        assert_eq!(storage.get(CREDENTIAL_KEY).as_deref(), Some("abc.def.ghi"));
        assert_eq!(store.credential(), Some("abc.def.ghi"));
    }

    #[test]
    fn store_persists_the_panel_hint() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();

        store.store(&storage, "abc");
        assert_eq!(storage.get(PANEL_KEY).as_deref(), Some(DEFAULT_PANEL));
    }

    #[test]
    fn storing_again_supersedes_the_previous_credential() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();

        store.store(&storage, "first");
        store.store(&storage, "second");
        assert_eq!(storage.get(CREDENTIAL_KEY).as_deref(), Some("second"));
        assert_eq!(store.credential(), Some("second"));
    }

    #[test]
    fn initialize_installs_a_persisted_credential_and_reports_ready() {
        let storage = MemoryStorage::default();
        storage.set(CREDENTIAL_KEY, "persisted");

        let mut store = SessionStore::new();
        assert!(!store.ready());
        let installed = store.initialize(&storage);

        assert_eq!(installed.as_deref(), Some("persisted"));
        assert!(store.ready());
        assert!(store.is_authenticated());
    }

    #[test]
    fn initialize_without_a_credential_still_reports_ready() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();

        assert_eq!(store.initialize(&storage), None);
        assert!(store.ready());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn authenticated_flag_ignores_silent_expiry_until_claims_are_decoded() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();

        store.store(&storage, &token_with_exp(NOW - 1));
        // The wrapper was set by store(); nothing has re-checked expiry yet.
        assert!(store.is_authenticated());

        let decoded = store.decode_claims(&storage, None, NOW).unwrap();
        assert!(decoded.expired);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn expired_claims_are_returned_and_the_store_ends_logged_out() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();
        store.store(&storage, &token_with_exp(NOW - 1));

        let decoded = store.decode_claims(&storage, None, NOW).unwrap();

        // Last-read-then-invalidate: the claims snapshot is still handed back.
        assert_eq!(decoded.claims.email, "ana@example.test");
        assert!(decoded.expired);
        assert_eq!(storage.get(CREDENTIAL_KEY), None);
        assert!(!store.is_authenticated());
        assert!(store.take_login_redirect());
    }

    #[test]
    fn live_claims_leave_the_session_intact() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();
        store.store(&storage, &token_with_exp(NOW + 600));

        let decoded = store.decode_claims(&storage, None, NOW).unwrap();

        assert!(!decoded.expired);
        assert!(store.is_authenticated());
        assert!(storage.get(CREDENTIAL_KEY).is_some());
    }

    #[test]
    fn decode_claims_prefers_the_given_credential() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();
        store.store(&storage, &token_with_exp(NOW + 600));

        let decoded = store
            .decode_claims(&storage, Some(&token_with_exp(NOW + 1200)), NOW)
            .unwrap();
        assert_eq!(decoded.claims.exp, Some(NOW + 1200));
    }

    #[test]
    fn decode_claims_without_any_credential_is_a_missing_error() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();

        assert!(matches!(
            store.decode_claims(&storage, None, NOW),
            Err(DecodeError::Missing)
        ));
    }

    #[test]
    fn malformed_credentials_fail_to_decode_without_touching_state() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();
        store.store(&storage, "not-a-token");

        assert!(matches!(
            store.decode_claims(&storage, None, NOW),
            Err(DecodeError::TokenFormat)
        ));
        // A decode failure is recoverable; it does not log the store out.
        assert!(store.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();
        store.store(&storage, "abc");

        store.logout(&storage);
        let after_first = store.clone();
        store.logout(&storage);

        assert_eq!(store, after_first);
        assert_eq!(storage.get(CREDENTIAL_KEY), None);
        assert!(!store.is_authenticated());
        assert!(store.take_login_redirect());
        assert!(!store.take_login_redirect());
    }

    #[test]
    fn logout_keeps_the_panel_hint() {
        let storage = MemoryStorage::default();
        let mut store = SessionStore::new();
        store.store(&storage, "abc");

        store.logout(&storage);
        assert_eq!(storage.get(PANEL_KEY).as_deref(), Some(DEFAULT_PANEL));
    }
}
