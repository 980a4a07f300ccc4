//! # Utilities Module
//!
//! Cross-cutting concerns shared by the core protocols and the API services.
//!
//! ## Design Notes
//!
//! Error types are defined in this module to avoid circular dependencies between
//! the `core` and `transport` modules. The gateway owns the mapping from raw
//! HTTP failures into [`errors::ApiError`]; everything above it works in terms
//! of that taxonomy only.

pub mod errors;

pub use errors::{ApiError, PasswordValidationError, TransportError};
