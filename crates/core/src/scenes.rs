//! Saved scenes (`/api/scenes`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A saved snapshot of effects across virtuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    /// Image or icon to display; the backend defaults this to `"Wallpaper"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_image: Option<String>,
    /// Comma-separated tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_tags: Option<String>,
    /// URL to PUT to when the scene activates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_puturl: Option<String>,
    /// Payload to send to `scene_puturl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_payload: Option<String>,
    /// MIDI note that activates the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_midiactivate: Option<String>,
    /// Per-virtual effect snapshots, keyed by virtual id. Opaque.
    #[serde(default)]
    pub virtuals: BTreeMap<String, serde_json::Value>,
}
