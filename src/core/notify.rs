//! User-facing notification capability
//!
//! The gateway and the recovery protocol emit at most one notification per
//! failure event through this trait; the UI layer decides how to render it.

/// Sink for user-facing notifications (title + message per event)
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str, message: &str);
    fn info(&self, title: &str, message: &str);
    fn warning(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// Notifier that routes everything to `tracing`
///
/// Default for headless use (tests, CLIs) where no notification widget exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, title: &str, message: &str) {
        tracing::info!(title, message, "notification");
    }

    fn info(&self, title: &str, message: &str) {
        tracing::info!(title, message, "notification");
    }

    fn warning(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "notification");
    }

    fn error(&self, title: &str, message: &str) {
        tracing::error!(title, message, "notification");
    }
}
