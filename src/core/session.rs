//! In-memory session state: the credential store
//!
//! All readers and writers of the ambient credential go through this type;
//! nothing else in the crate holds authentication state. Operations are
//! synchronous and total, and `is_authenticated` never performs I/O.

use crate::models::{Credential, Identity};
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct Session {
    credential: Credential,
    identity: Identity,
}

/// Holder of the current credential and derived identity
///
/// Presence of a credential is the sole definition of "authenticated". The
/// credential and identity are replaced and cleared atomically, so a reader
/// can never observe one without the other.
///
/// The post-login redirect path lives here too, in its own slot: the recovery
/// flow writes it just before clearing the session, and the next successful
/// login consumes it. `clear` deliberately leaves it alone.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: Mutex<Option<Session>>,
    redirect_path: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing credential and identity atomically
    pub fn set_credential(&self, credential: Credential, identity: Identity) {
        let mut guard = self.session.lock().expect("session lock poisoned");
        *guard = Some(Session {
            credential,
            identity,
        });
    }

    /// Remove credential and identity; idempotent
    pub fn clear(&self) {
        let mut guard = self.session.lock().expect("session lock poisoned");
        *guard = None;
    }

    /// True iff a credential is present
    pub fn is_authenticated(&self) -> bool {
        self.session
            .lock()
            .expect("session lock poisoned")
            .is_some()
    }

    /// The credential for attachment to outbound requests, if any
    pub fn current(&self) -> Option<Credential> {
        self.session
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.credential.clone())
    }

    /// The identity derived from the login response, if authenticated
    pub fn identity(&self) -> Option<Identity> {
        self.session
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.identity.clone())
    }

    /// Remember where the user was before the session expired
    pub fn set_redirect_path(&self, path: impl Into<String>) {
        let mut guard = self.redirect_path.lock().expect("redirect lock poisoned");
        *guard = Some(path.into());
    }

    /// Consume the remembered location, if one was set
    pub fn take_redirect_path(&self) -> Option<String> {
        self.redirect_path
            .lock()
            .expect("redirect lock poisoned")
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::new("admin", Some(1), false)
    }

    #[test]
    fn test_set_then_clear_leaves_no_trace() {
        let store = SessionStore::new();
        store.set_credential(Credential::bearer("tok"), identity());
        assert!(store.is_authenticated());

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
        assert!(store.identity().is_none());

        // Idempotent
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_current_is_last_set_credential() {
        let store = SessionStore::new();
        store.set_credential(Credential::bearer("first"), identity());
        store.set_credential(
            Credential::bearer("second"),
            Identity::new("other", Some(2), true),
        );

        let header = store.current().unwrap().authorization_header();
        assert_eq!(header, "Bearer second");
        assert_eq!(store.identity().unwrap().username, "other");
        assert!(store.identity().unwrap().default_password);
    }

    #[test]
    fn test_redirect_path_survives_clear_and_is_consumed_once() {
        let store = SessionStore::new();
        store.set_credential(Credential::bearer("tok"), identity());
        store.set_redirect_path("/reports/7");
        store.clear();

        assert_eq!(store.take_redirect_path().as_deref(), Some("/reports/7"));
        assert!(store.take_redirect_path().is_none());
    }
}
