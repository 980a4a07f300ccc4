//! # Application-Wide Constants
//!
//! Centralized configuration values and magic numbers used throughout the
//! client core.
//!
//! Constants are defined here (rather than scattered across modules) to keep a
//! single source of truth and to document WHY each value was chosen.

use std::time::Duration;

// ============================================================================
// Polling
// ============================================================================

/// Delay between status fetches while a report is GENERATING
///
/// **Rationale**: 2 seconds keeps the list view fresh without hammering the
/// backend; report generation typically takes tens of seconds, so a tighter
/// interval buys nothing.
pub const REPORT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

// ============================================================================
// HTTP
// ============================================================================

/// Per-request timeout applied by the reqwest transport
///
/// **Rationale**: bounds individual calls so an unresponsive backend surfaces
/// as a network error instead of a hang. The polling loop itself carries no
/// overall deadline; only the calls inside it do.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Navigation
// ============================================================================

/// Location of the login view
///
/// The recovery flow never remembers this as a return location, and a 401 that
/// arrives while already here must not trigger a redirect loop.
pub const LOGIN_LOCATION: &str = "/login";

/// Login location carrying the session-expired indicator
///
/// The query flag lets the login view explain WHY the user landed there.
pub const SESSION_EXPIRED_LOCATION: &str = "/login?sessionExpired=true";

// ============================================================================
// Security / Validation
// ============================================================================

/// Minimum length for a new password
///
/// **Rationale**: 8 characters is the industry-standard minimum and prevents
/// trivially weak passwords. Matches the backend's own validation so the
/// client-side check never accepts something the server would reject.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters permitted in passwords besides letters and digits
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>_-";
