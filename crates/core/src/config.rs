//! System configuration (`/api/config`) and feature flags.
//!
//! The config endpoint returns a free-form map of named settings and
//! accepts partial patches: top-level keys in the patch replace the
//! corresponding keys on the appliance, everything else is untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Feature flags gating optional panel sections.
///
/// Unknown flag names from newer firmware are kept in `extra` and written
/// back unchanged when the map is patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    #[serde(default)]
    pub cloud: bool,
    #[serde(default)]
    pub webaudio: bool,
    #[serde(default)]
    pub streamto: bool,
    #[serde(default)]
    pub transitions: bool,
    #[serde(default)]
    pub frequencies: bool,
    #[serde(default)]
    pub spotify: bool,
    #[serde(default)]
    pub waves: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, bool>,
}

impl Features {
    /// Flip one flag by name. Returns false if the name is unknown and
    /// was added to the pass-through map instead.
    pub fn set(&mut self, name: &str, enabled: bool) -> bool {
        match name {
            "cloud" => self.cloud = enabled,
            "webaudio" => self.webaudio = enabled,
            "streamto" => self.streamto = enabled,
            "transitions" => self.transitions = enabled,
            "frequencies" => self.frequencies = enabled,
            "spotify" => self.spotify = enabled,
            "waves" => self.waves = enabled,
            other => {
                self.extra.insert(other.to_string(), enabled);
                return false;
            }
        }
        true
    }
}

/// The mirrored system configuration.
///
/// Known keys get typed accessors; the full map is retained so partial
/// patches can be built without dropping keys the client does not model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub features: Features,
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl SystemConfig {
    /// Whether segment creation is enabled on the appliance.
    pub fn create_segments(&self) -> bool {
        self.settings
            .get("create_segments")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// User-saved effect presets, when present. Callers must treat the
    /// value as optional: older firmware omits the key entirely.
    pub fn user_presets(&self) -> Option<&serde_json::Value> {
        self.settings.get("user_presets")
    }
}
