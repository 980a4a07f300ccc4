//! # Domain Models
//!
//! Credential types for the session and serde types for the backend's REST
//! surface.
//!
//! ## Security Design
//!
//! The [`SecureString`] type provides memory-safe credential handling:
//! - Secret data is zeroed on drop to prevent leakage via swap/core dumps
//! - Never exposed in `Debug` or `Display` implementations
//! - Uses unsafe code (carefully audited) for memory zeroing
//!
//! The credential is held in memory for the browser-session lifetime only; it
//! is never persisted, and the wire types in [`resources`] never carry it.

pub mod credentials;
pub mod resources;

pub use credentials::{Credential, Identity, SecureString};
pub use resources::{
    unwrap_content, unwrap_embedded, Agent, AgentStatus, AgentUpdate, CheckResult, HealthStatus,
    Link, Links, QualityCheck, Report, ReportStatus, ResourceId, Server, ServerPayload, Settings,
};
