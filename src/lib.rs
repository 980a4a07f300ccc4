//! quality-client - client core for biomedical data-quality dashboards
//!
//! Library exposing the session, gateway, and decision logic shared by the
//! agent and central-server dashboards.

// Public modules
pub mod api;
pub mod constants;
pub mod core;
pub mod models;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Gateway, Navigator, Notifier, SessionStore, Verdict};
pub use crate::models::{Credential, Identity, QualityCheck, Report, ReportStatus, SecureString};
pub use crate::transport::HttpClient;
pub use crate::utils::{ApiError, PasswordValidationError, TransportError};
