//! Session recovery protocol for expired credentials
//!
//! A 401 on an authenticated session means the credential is no longer valid.
//! Recovery clears the session, remembers where the user was, tells them what
//! happened, and sends them to the login view. The guard ensures at most one
//! recovery run is in flight system-wide: concurrent 401s from parallel
//! requests are suppressed instead of stacking navigations.

use crate::constants::{LOGIN_LOCATION, SESSION_EXPIRED_LOCATION};
use crate::core::notify::Notifier;
use crate::core::session::SessionStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Navigation capability injected into the recovery protocol
///
/// Decouples recovery from any concrete routing mechanism; the UI layer maps
/// this onto its router, tests record the calls.
#[async_trait::async_trait]
pub trait Navigator: Send + Sync {
    /// The user's current navigable location (path plus query)
    fn current_location(&self) -> String;

    /// Navigate to the given location
    async fn navigate_to(&self, location: &str) -> Result<(), String>;
}

/// What a single 401 event resulted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// The protocol ran: session cleared, user notified and redirected
    Recovered,
    /// Another recovery run was already in flight; this event was suppressed
    AlreadyRecovering,
    /// No credential was stored (e.g. a failed login attempt); nothing to do
    NotAuthenticated,
}

/// Two-state machine (`Idle`/`Recovering`) owning the 401 recovery flow
///
/// The state is exposed only through [`handle_unauthorized`]; there is no way
/// to flip it from outside, so a stuck `Recovering` state cannot be produced
/// by callers.
///
/// [`handle_unauthorized`]: RecoveryGuard::handle_unauthorized
pub struct RecoveryGuard {
    recovering: AtomicBool,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl RecoveryGuard {
    pub fn new(navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        RecoveryGuard {
            recovering: AtomicBool::new(false),
            navigator,
            notifier,
        }
    }

    /// True while a recovery run is in flight
    pub fn is_recovering(&self) -> bool {
        self.recovering.load(Ordering::SeqCst)
    }

    /// React to an authorization failure
    ///
    /// Effects, in order, when the session was authenticated: remember the
    /// current location (unless it already is the login view), clear the
    /// credential store, emit the "Session Expired" notification, navigate to
    /// the login view with the expired indicator. The guard returns to `Idle`
    /// after the navigation completes, whether it succeeded or not, so a
    /// navigation failure cannot leave the system permanently unrecoverable.
    pub async fn handle_unauthorized(&self, session: &SessionStore) -> RecoveryOutcome {
        if self.recovering.swap(true, Ordering::SeqCst) {
            tracing::debug!("401 received while a recovery run is already in flight");
            return RecoveryOutcome::AlreadyRecovering;
        }

        // A 401 on the login call itself is not an expired session.
        if !session.is_authenticated() {
            self.recovering.store(false, Ordering::SeqCst);
            return RecoveryOutcome::NotAuthenticated;
        }

        let location = self.navigator.current_location();
        if !location.is_empty() && location_path(&location) != LOGIN_LOCATION {
            session.set_redirect_path(location);
        }

        session.clear();
        self.notifier.warning(
            "Session Expired",
            "Your session has expired. Please log in again.",
        );

        tracing::info!("session expired, redirecting to login");
        let navigation = self.navigator.navigate_to(SESSION_EXPIRED_LOCATION).await;

        // Completion hook: leave Recovering on both paths.
        self.recovering.store(false, Ordering::SeqCst);

        if let Err(err) = navigation {
            tracing::warn!(error = %err, "navigation to login failed after session expiry");
        }

        RecoveryOutcome::Recovered
    }
}

/// Path component of a location, without the query string
fn location_path(location: &str) -> &str {
    location.split('?').next().unwrap_or(location)
}
