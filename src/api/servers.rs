//! Central server registrations held by the agent

use crate::core::gateway::Gateway;
use crate::models::{unwrap_content, unwrap_embedded, Server, ServerPayload};
use crate::utils::ApiError;
use serde_json::Value;
use std::sync::Arc;

/// Server-registration service over the gateway
pub struct ServerService {
    gateway: Arc<Gateway>,
}

impl ServerService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        ServerService { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Server>, ApiError> {
        let payload: Value = self.gateway.get_json("/servers").await?;
        unwrap_embedded(payload, "servers")
    }

    pub async fn create(&self, payload: &ServerPayload) -> Result<Server, ApiError> {
        let response: Value = self.gateway.post_json("/servers", payload).await?;
        decode_server(response)
    }

    pub async fn update(&self, id: &str, payload: &ServerPayload) -> Result<Server, ApiError> {
        let response: Value = self
            .gateway
            .put_json(&format!("/servers/{}", id), payload)
            .await?;
        decode_server(response)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.gateway.delete(&format!("/servers/{}", id)).await
    }
}

fn decode_server(response: Value) -> Result<Server, ApiError> {
    serde_json::from_value(unwrap_content(response)).map_err(|e| ApiError::Decode(e.to_string()))
}
