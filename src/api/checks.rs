//! Quality-check definitions and threshold administration
//!
//! Checks are identified by content hash. The dashboard joins report results
//! to definitions through `check_map`; results whose hash has no definition
//! are the unmapped ones the status engine scores as `UNKNOWN`.

use crate::core::gateway::Gateway;
use crate::models::{unwrap_embedded, QualityCheck};
use crate::utils::ApiError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Quality-check service over the gateway
pub struct CheckService {
    gateway: Arc<Gateway>,
}

impl CheckService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        CheckService { gateway }
    }

    pub async fn list(&self) -> Result<Vec<QualityCheck>, ApiError> {
        let payload: Value = self.gateway.get_json("/v1/quality-checks").await?;
        unwrap_embedded(payload, "qualityChecks")
    }

    /// Definitions keyed by hash, for joining report results to checks
    pub async fn check_map(&self) -> Result<HashMap<String, QualityCheck>, ApiError> {
        let checks = self.list().await?;
        Ok(checks
            .into_iter()
            .map(|check| (check.hash.clone(), check))
            .collect())
    }

    /// Change a check's alerting thresholds
    pub async fn update_thresholds(
        &self,
        hash: &str,
        warning_threshold: f64,
        error_threshold: f64,
    ) -> Result<QualityCheck, ApiError> {
        self.gateway
            .put_json(
                &format!("/v1/quality-checks/{}", hash),
                &json!({
                    "warningThreshold": warning_threshold,
                    "errorThreshold": error_threshold,
                }),
            )
            .await
    }
}
