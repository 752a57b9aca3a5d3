//! Spotify song triggers.
//!
//! A trigger activates a scene when a given song passes a playback
//! position.  Triggers live inside the Spotify integration on the backend
//! and arrive nested in the `/api/integrations` response.

use serde::{Deserialize, Serialize};

/// A scene-activation trigger tied to a Spotify song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyTrigger {
    /// Scene to activate.
    pub scene_id: String,
    /// Spotify song identifier.
    pub song_id: String,
    /// Human-readable song name, denormalized for display.
    pub song_name: String,
    /// Playback position threshold in milliseconds.
    pub song_position: u64,
}

/// Identifier pair addressing one trigger for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerKey {
    pub scene_id: String,
    pub song_id: String,
}

impl TriggerKey {
    pub fn of(trigger: &SpotifyTrigger) -> Self {
        Self {
            scene_id: trigger.scene_id.clone(),
            song_id: trigger.song_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trigger() {
        let json = r#"{"scene_id":"chill","song_id":"4uLU6hMC","song_name":"Song A","song_position":15000}"#;
        let trigger: SpotifyTrigger = serde_json::from_str(json).unwrap();
        assert_eq!(trigger.scene_id, "chill");
        assert_eq!(trigger.song_position, 15_000);
        let key = TriggerKey::of(&trigger);
        assert_eq!(key.song_id, "4uLU6hMC");
    }
}
