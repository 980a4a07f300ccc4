//! API services: one per backend resource, all built on the gateway
//!
//! Services hold an `Arc<Gateway>` and translate between REST payloads and the
//! model types; none of them touch HTTP directly.

pub mod agents;
pub mod auth;
pub mod checks;
pub mod health;
pub mod reports;
pub mod servers;
pub mod settings;
pub mod users;

pub use agents::AgentService;
pub use auth::{AuthService, LoginOutcome};
pub use checks::CheckService;
pub use health::{HealthService, HealthSnapshot};
pub use reports::{GenerateOutcome, ReportService};
pub use servers::ServerService;
pub use settings::SettingsService;
pub use users::{PasswordChangeError, UserService};
