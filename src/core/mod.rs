//! Core protocols (transport-agnostic)
//!
//! CRITICAL: This module MUST NOT import reqwest or any UI framework; I/O and
//! navigation enter only through the traits defined here.

pub mod gateway;
pub mod notify;
pub mod polling;
pub mod recovery;
pub mod session;
pub mod status;
pub mod transport;
pub mod validation;

// Test doubles for the transport and UI seams (tests only)
#[cfg(test)]
pub mod mocks;

pub use gateway::{ApiRequest, Gateway};
pub use notify::{Notifier, TracingNotifier};
pub use polling::poll_until_terminal;
pub use recovery::{Navigator, RecoveryGuard, RecoveryOutcome};
pub use session::SessionStore;
pub use status::{count_by_status, decide, report_status, StatusCounts, Verdict};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use validation::validate_password_change;
