//! Backend data-store health probe
//!
//! Unlike the other services, a failed health request is not an error to
//! surface: it IS the answer. Failures degrade into a synthetic DOWN snapshot
//! so the dashboard can render connection state without special-casing.

use crate::core::gateway::Gateway;
use crate::models::HealthStatus;
use crate::utils::ApiError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A health reading with the time it was taken
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSnapshot {
    pub status: HealthStatus,
    pub checked_at: DateTime<Utc>,
}

/// Health service over the gateway
pub struct HealthService {
    gateway: Arc<Gateway>,
}

impl HealthService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        HealthService { gateway }
    }

    /// Probe the backend's data-store connection; never fails
    pub async fn check(&self) -> HealthSnapshot {
        let status = match self.gateway.get_json::<HealthStatus>("/entities/health").await {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(error = %err, "health probe failed");
                HealthStatus::down(err.to_string())
            }
        };
        HealthSnapshot {
            status,
            checked_at: Utc::now(),
        }
    }

    /// Probe, surfacing the error instead of degrading it
    pub async fn check_strict(&self) -> Result<HealthStatus, ApiError> {
        self.gateway.get_json("/entities/health").await
    }
}
