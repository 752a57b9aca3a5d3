//! Integration resources (`/api/integrations`).
//!
//! An integration connects the appliance to an external service (Spotify,
//! MQTT, ...).  The backend issues every integration id; the client never
//! originates one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Connection state reported by the backend.
///
/// Wire values are the integer codes the appliance uses.  Codes from
/// newer firmware fall into [`Unknown`](Self::Unknown) and round-trip
/// unchanged rather than rejecting the whole integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum IntegrationStatus {
    Disconnected,
    Connected,
    Disconnecting,
    Connecting,
    Unknown(u8),
}

impl From<u8> for IntegrationStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Disconnected,
            1 => Self::Connected,
            2 => Self::Disconnecting,
            3 => Self::Connecting,
            other => Self::Unknown(other),
        }
    }
}

impl From<IntegrationStatus> for u8 {
    fn from(status: IntegrationStatus) -> u8 {
        match status {
            IntegrationStatus::Disconnected => 0,
            IntegrationStatus::Connected => 1,
            IntegrationStatus::Disconnecting => 2,
            IntegrationStatus::Connecting => 3,
            IntegrationStatus::Unknown(code) => code,
        }
    }
}

/// One integration as mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    /// Server-issued identifier.
    pub id: String,
    /// Integration type tag, e.g. `"spotify"` or `"mqtt_hass"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the integration is currently enabled.
    #[serde(default)]
    pub active: bool,
    /// Connection state, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IntegrationStatus>,
    /// Integration-specific configuration. Opaque to the client.
    #[serde(default)]
    pub config: BTreeMap<String, serde_json::Value>,
    /// Integration-specific runtime data. Opaque to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Payload to create a new integration. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewIntegration {
    #[serde(rename = "type")]
    pub kind: String,
    pub config: BTreeMap<String, serde_json::Value>,
}

/// Payload to reconfigure an existing integration.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateIntegration {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub config: BTreeMap<String, serde_json::Value>,
}
