//! Auth session state and context for the console. The provider rehydrates
//! the persisted credential once on mount and exposes derived signals for
//! guards and routes. The raw credential stays inside the session store and
//! the API layer's default bearer header; routes read identity through
//! `decode_claims` instead of touching the token.

use crate::app_lib::api;
use crate::features::auth::storage::BrowserStorage;
use leptos::prelude::*;
use session_core::{DecodeError, DecodedClaims, SessionStore};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    store: RwSignal<SessionStore>,
    pub is_authenticated: Signal<bool>,
    pub ready: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided store signal.
    fn new(store: RwSignal<SessionStore>) -> Self {
        let is_authenticated = Signal::derive(move || store.get().is_authenticated());
        let ready = Signal::derive(move || store.get().ready());
        Self {
            store,
            is_authenticated,
            ready,
        }
    }

    /// Rehydrates the persisted credential and installs the default bearer
    /// header. Consumers must not trust the context before `ready` is set.
    pub fn initialize(&self) {
        self.store.update(|store| {
            if let Some(credential) = store.initialize(&BrowserStorage) {
                api::set_bearer(Some(&credential));
            }
        });
    }

    /// Installs a freshly issued credential as the current session.
    pub fn store_credential(&self, credential: &str) {
        api::set_bearer(Some(credential));
        self.store
            .update(|store| store.store(&BrowserStorage, credential));
    }

    /// Decodes identity claims from the given or the current credential. When
    /// the credential turns out to be expired the store has logged out by the
    /// time this returns; the caller still receives the final claims snapshot
    /// and is responsible for surfacing the session-expired notice.
    ///
    /// # Errors
    ///
    /// Returns the decode failure for an absent or malformed credential;
    /// callers treat it as "not authenticated".
    pub fn decode_claims(&self, given: Option<&str>) -> Result<DecodedClaims, DecodeError> {
        let now = unix_now();
        let outcome = self
            .store
            .try_update(|store| store.decode_claims(&BrowserStorage, given, now))
            .unwrap_or(Err(DecodeError::Missing));
        if let Ok(decoded) = &outcome {
            if decoded.expired {
                api::set_bearer(None);
            }
        }
        outcome
    }

    /// Clears the session everywhere: bearer header, memory, and storage.
    pub fn logout(&self) {
        api::set_bearer(None);
        self.store.update(|store| store.logout(&BrowserStorage));
    }

    /// Consume the store's pending redirect-to-login signal.
    pub fn take_login_redirect(&self) -> bool {
        self.store
            .try_update(|store| store.take_login_redirect())
            .unwrap_or(false)
    }
}

/// Provides auth context and rehydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = RwSignal::new(SessionStore::new());
    let auth = AuthContext::new(store);
    provide_context(auth);

    auth.initialize();

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(SessionStore::new())))
}

fn unix_now() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}
