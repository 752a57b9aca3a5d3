//! Virtual lights (`/api/virtuals`).
//!
//! A virtual maps an effect onto one or more device pixel segments. The
//! backend auto-generates one virtual per device; user-created virtuals
//! have `is_device == false`.

use serde::{Deserialize, Serialize};

/// The effect currently rendered on a virtual, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectInfo {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

impl EffectInfo {
    /// The backend sends `"effect": {}` when nothing is active.
    pub fn is_active(&self) -> bool {
        !self.kind.is_empty()
    }
}

/// One virtual light as mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Virtual {
    /// Server-issued identifier.
    pub id: String,
    /// True for the auto-generated one-per-device virtual.
    #[serde(default)]
    pub is_device: bool,
    #[serde(default)]
    pub auto_generated: bool,
    /// Pixel segments: `[device_id, start, stop, reversed]` tuples.
    #[serde(default)]
    pub segments: Vec<serde_json::Value>,
    #[serde(default)]
    pub pixel_count: u32,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub effect: EffectInfo,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_virtual_with_empty_effect() {
        let json = r#"{"id":"garage","is_device":true,"auto_generated":true,
                       "segments":[["garage",0,299,false]],"pixel_count":300,
                       "active":false,"effect":{},"config":{"name":"Garage"}}"#;
        let virtual_light: Virtual = serde_json::from_str(json).unwrap();
        assert!(virtual_light.is_device);
        assert!(!virtual_light.effect.is_active());
        assert_eq!(virtual_light.segments.len(), 1);
    }

    #[test]
    fn parse_virtual_with_running_effect() {
        let json = r#"{"id":"strip","effect":{"name":"Rainbow","type":"rainbow",
                       "config":{"speed":1.5}}}"#;
        let virtual_light: Virtual = serde_json::from_str(json).unwrap();
        assert!(virtual_light.effect.is_active());
        assert_eq!(virtual_light.effect.name, "Rainbow");
    }
}
