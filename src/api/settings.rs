//! Agent connection settings for the FHIR store

use crate::core::gateway::Gateway;
use crate::models::Settings;
use crate::utils::ApiError;
use std::sync::Arc;

/// Settings service over the gateway
pub struct SettingsService {
    gateway: Arc<Gateway>,
}

impl SettingsService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        SettingsService { gateway }
    }

    pub async fn get(&self) -> Result<Settings, ApiError> {
        self.gateway.get_json("/settings").await
    }

    pub async fn update(&self, settings: &Settings) -> Result<Settings, ApiError> {
        self.gateway.put_json("/settings", settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mocks::{MockNavigator, MockTransport, RecordingNotifier};
    use crate::core::session::SessionStore;
    use serde_json::json;

    fn service(transport: Arc<MockTransport>) -> SettingsService {
        let gateway = Gateway::new(
            "http://agent.local/api",
            transport,
            Arc::new(SessionStore::new()),
            Arc::new(MockNavigator::at("/settings")),
            Arc::new(RecordingNotifier::new()),
        );
        SettingsService::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_get_parses_camel_case_fields() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({ "fhirUrl": "http://fhir.local/r4", "fhirUsername": "agent" }),
        );
        let service = service(transport);

        let settings = service.get().await.unwrap();

        assert_eq!(settings.fhir_url.as_deref(), Some("http://fhir.local/r4"));
        assert_eq!(settings.fhir_username.as_deref(), Some("agent"));
        assert!(settings.fhir_password.is_none());
    }

    #[tokio::test]
    async fn test_update_sends_camel_case_body() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({ "fhirUrl": "http://fhir.local/r4" }));
        let service = service(transport.clone());

        service
            .update(&Settings {
                fhir_url: Some("http://fhir.local/r4".to_string()),
                fhir_username: None,
                fhir_password: Some("secret".to_string()),
            })
            .await
            .unwrap();

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["fhirUrl"], "http://fhir.local/r4");
        assert_eq!(body["fhirPassword"], "secret");
    }
}
