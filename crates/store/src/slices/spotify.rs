//! Spotify slice: song triggers nested in the Spotify integration.
//!
//! Triggers share the `/api/integrations` response with the
//! integrations slice but live in their own region.

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;
use lumx_core::spotify::{SpotifyTrigger, TriggerKey};

use crate::store::Store;

use super::warn_fetch_failed;

pub struct SpotifySlice;

impl SpotifySlice {
    /// Replace the trigger region from the integrations response.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Spotify);
        let response = transport.get_integrations().await.inspect_err(|err| {
            warn_fetch_failed(Region::Spotify, err);
        })?;
        store.commit_fetch(ticket, "spotify/fetched", |state| {
            state.spotify_triggers = response.spotify;
        });
        Ok(())
    }

    /// Create a song trigger.
    pub async fn add_trigger(
        transport: &dyn Transport,
        trigger: &SpotifyTrigger,
    ) -> Result<(), ApiError> {
        transport.add_song_trigger(trigger).await
    }

    /// Replace an existing song trigger.
    pub async fn edit_trigger(
        transport: &dyn Transport,
        trigger: &SpotifyTrigger,
    ) -> Result<(), ApiError> {
        transport.edit_song_trigger(trigger).await
    }

    /// Flip a trigger's enabled flag on the Spotify integration.
    pub async fn toggle_trigger(
        transport: &dyn Transport,
        spotify_id: &str,
        config: &serde_json::Value,
    ) -> Result<(), ApiError> {
        transport.toggle_song_trigger(spotify_id, config).await
    }

    /// Remove a song trigger by its scene/song pair.
    pub async fn delete_trigger(
        transport: &dyn Transport,
        key: &TriggerKey,
    ) -> Result<(), ApiError> {
        transport.delete_song_trigger(key).await
    }
}
