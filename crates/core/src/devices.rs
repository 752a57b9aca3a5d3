//! Physical LED devices (`/api/devices`).

use serde::{Deserialize, Serialize};

/// Device configuration as stored on the appliance.
///
/// Only the fields the panel reads are typed; everything else passes
/// through untouched so updates never lose firmware-specific keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pixel_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One LED device as mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Server-issued identifier.
    pub id: String,
    /// Device type tag, e.g. `"wled"` or `"e131"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the device answered its last health check.
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub config: DeviceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_device_keeps_unknown_config_keys() {
        let json = r#"{"id":"garage","type":"wled","online":true,
                       "config":{"name":"Garage","pixel_count":300,
                                 "ip_address":"10.0.0.7","refresh_rate":62}}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert!(device.online);
        assert_eq!(device.config.pixel_count, 300);
        assert_eq!(device.config.extra["refresh_rate"], 62);
    }
}
