//! Concrete transport implementations
//!
//! The trait lives in `core::transport`; this module provides the real one.

pub mod http;

pub use http::HttpClient;
