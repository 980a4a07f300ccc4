//! Agent administration on the central server
//!
//! The central-server dashboard lists registered agents and lets an
//! administrator approve pending registrations, decline them, or rename an
//! agent. Approval and decline are status transitions expressed through the
//! same PATCH endpoint as renaming.

use crate::core::gateway::Gateway;
use crate::models::{unwrap_embedded, Agent, AgentStatus, AgentUpdate, Report};
use crate::utils::ApiError;
use serde_json::Value;
use std::sync::Arc;

/// Agent-administration service over the gateway
pub struct AgentService {
    gateway: Arc<Gateway>,
}

impl AgentService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        AgentService { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Agent>, ApiError> {
        let payload: Value = self.gateway.get_json("/v1/agents").await?;
        unwrap_embedded(payload, "agents")
    }

    /// Approve a pending registration; the agent starts sending reports
    pub async fn approve(&self, id: &str) -> Result<Agent, ApiError> {
        self.set_status(id, AgentStatus::Active).await
    }

    /// Decline a registration (or deactivate an active agent)
    pub async fn decline(&self, id: &str) -> Result<Agent, ApiError> {
        self.set_status(id, AgentStatus::Inactive).await
    }

    pub async fn rename(&self, id: &str, name: &str) -> Result<Agent, ApiError> {
        let update = AgentUpdate {
            name: Some(name.to_string()),
            ..AgentUpdate::default()
        };
        self.patch(id, &update).await
    }

    /// Reports submitted by one agent
    pub async fn reports(&self, id: &str) -> Result<Vec<Report>, ApiError> {
        let payload: Value = self
            .gateway
            .get_json(&format!("/v1/agents/{}/reports", id))
            .await?;
        unwrap_embedded(payload, "reports")
    }

    async fn set_status(&self, id: &str, status: AgentStatus) -> Result<Agent, ApiError> {
        let update = AgentUpdate {
            status: Some(status),
            ..AgentUpdate::default()
        };
        self.patch(id, &update).await
    }

    async fn patch(&self, id: &str, update: &AgentUpdate) -> Result<Agent, ApiError> {
        self.gateway
            .patch_json(&format!("/v1/agents/{}", id), update)
            .await
    }
}
