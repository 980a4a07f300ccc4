//! Wire types for the monitoring backend's REST surface
//!
//! The backend emits Spring HATEOAS (HAL) payloads: collections arrive under an
//! `_embedded` key, single resources carry a `_links.self` entry, and some
//! deployments additionally wrap each collection item in a `content` envelope.
//! The types here absorb all of that so the services above work with plain
//! structs.

use crate::utils::ApiError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Resource identifier
///
/// The two backend variants disagree on id shape (UUID strings vs numeric ids),
/// so this accepts either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{}", n),
            ResourceId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single HAL link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// The `_links` object on a HAL resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
}

/// Lifecycle status of a report resource
///
/// `Generating` is the only non-terminal status; anything else stops the
/// polling loop. Statuses this client does not know about deserialize as
/// `Unknown`, which is deliberately terminal so an unrecognized server state
/// can never hang a poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Generating,
    Generated,
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    /// True once the backend has finished working on the report
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReportStatus::Generating)
    }
}

impl Default for ReportStatus {
    fn default() -> Self {
        ReportStatus::Unknown
    }
}

/// One quality-check result inside a report
///
/// Immutable once received; verdicts are recomputed from it on demand, never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Content hash identifying the quality check this result belongs to
    pub hash: String,
    /// Raw numeric outcome, compared against the check's thresholds
    pub result: f64,
}

/// A quality-check definition with its alerting thresholds
///
/// `warning_threshold <= error_threshold` is assumed from the backend, not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCheck {
    pub hash: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub registered_at: Option<NaiveDateTime>,
    pub warning_threshold: f64,
    pub error_threshold: f64,
}

/// A quality report
///
/// Created by a generation request and mutated only by the backend; the client
/// polls the self link until the status turns terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub results: Vec<CheckResult>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Report {
    /// The self-referencing location used by the polling loop
    pub fn self_href(&self) -> Option<&str> {
        self.links.self_link.as_ref().map(|link| link.href.as_str())
    }
}

/// Connection status of a registered agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    Active,
    Inactive,
    Error,
    Pending,
    #[serde(other)]
    Unknown,
}

impl AgentStatus {
    /// Human-readable label ("Active", "Pending", ...)
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Inactive => "Inactive",
            AgentStatus::Error => "Error",
            AgentStatus::Pending => "Pending",
            AgentStatus::Unknown => "Unknown",
        }
    }

    /// Explanatory text shown alongside the status
    pub fn tooltip(&self) -> &'static str {
        match self {
            AgentStatus::Active => {
                "Server connection is active. Reports are being sent to this central server."
            }
            AgentStatus::Inactive => {
                "Server connection is inactive. Reports will not be sent until the connection is reactivated."
            }
            AgentStatus::Error => {
                "Connection error detected. Please check server configuration or contact your administrator."
            }
            AgentStatus::Pending => {
                "Registration submitted successfully. Waiting for administrator approval on the central server before reports can be sent."
            }
            AgentStatus::Unknown => {
                "Server status is unknown. Please refresh or contact support."
            }
        }
    }
}

/// A data-collecting agent registered with the central server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub status: AgentStatus,
}

/// PATCH body for agent administration (approve, decline, rename)
///
/// Only the fields being changed are serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A central server registration held by an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub status: Option<AgentStatus>,
}

/// Create/update payload for a server registration
#[derive(Debug, Clone, Serialize)]
pub struct ServerPayload {
    pub url: String,
    pub name: String,
}

/// Agent connection settings for the underlying FHIR store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub fhir_url: Option<String>,
    #[serde(default)]
    pub fhir_username: Option<String>,
    #[serde(default)]
    pub fhir_password: Option<String>,
}

/// Health of the backend's connection to its data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub details: Option<Value>,
}

impl HealthStatus {
    /// Synthesized DOWN status for a failed health check
    pub fn down(error: impl Into<String>) -> Self {
        HealthStatus {
            status: "DOWN".to_string(),
            details: Some(serde_json::json!({ "error": error.into() })),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == "UP"
    }
}

/// Strip the `content` envelope some HAL renderers wrap around a resource
pub fn unwrap_content(value: Value) -> Value {
    match value {
        Value::Object(mut obj) if obj.contains_key("content") => {
            obj.remove("content").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Unwrap a HAL collection payload into plain items
///
/// Handles the three shapes the dashboards see in the wild:
/// - `{"_embedded": {"<key>": [ ... ]}}`
/// - the same, with each item wrapped in a `content` envelope
/// - a bare JSON array
///
/// A payload with none of these (e.g. an empty collection without `_embedded`)
/// yields an empty vector.
pub fn unwrap_embedded<T: serde::de::DeserializeOwned>(
    payload: Value,
    key: &str,
) -> Result<Vec<T>, ApiError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("_embedded") {
            Some(Value::Object(mut embedded)) => match embedded.remove(key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(unwrap_content(item))
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .collect()
}
