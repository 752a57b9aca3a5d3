//! The transport seam between the state layer and HTTP.
//!
//! Slices program against [`Transport`] rather than [`ApiClient`] so the
//! store contract can be tested with a stub implementation.  The trait
//! mirrors the typed endpoint surface one-to-one.

use std::collections::BTreeMap;

use async_trait::async_trait;

use lumx_core::colors::ColorPalette;
use lumx_core::config::SystemConfig;
use lumx_core::devices::Device;
use lumx_core::info::SystemInfo;
use lumx_core::integrations::{NewIntegration, UpdateIntegration};
use lumx_core::scenes::Scene;
use lumx_core::spotify::{SpotifyTrigger, TriggerKey};

use crate::api::{ApiClient, IntegrationsResponse, VirtualsResponse};
use crate::error::ApiError;

/// Typed access to the appliance REST API.
///
/// Mutating methods return `Ok(())` on a 2xx response and never report
/// resulting state; callers re-fetch to resynchronize.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_colors(&self) -> Result<ColorPalette, ApiError>;
    async fn add_color(&self, name: &str, value: &str) -> Result<(), ApiError>;
    async fn delete_colors(&self, keys: &[String]) -> Result<(), ApiError>;

    async fn get_integrations(&self) -> Result<IntegrationsResponse, ApiError>;
    async fn add_integration(&self, payload: &NewIntegration) -> Result<(), ApiError>;
    async fn update_integration(&self, payload: &UpdateIntegration) -> Result<(), ApiError>;
    async fn toggle_integration(&self, id: &str) -> Result<(), ApiError>;
    async fn delete_integration(&self, id: &str) -> Result<(), ApiError>;

    async fn add_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError>;
    async fn edit_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError>;
    async fn toggle_song_trigger(
        &self,
        spotify_id: &str,
        config: &serde_json::Value,
    ) -> Result<(), ApiError>;
    async fn delete_song_trigger(&self, key: &TriggerKey) -> Result<(), ApiError>;

    async fn get_devices(&self) -> Result<BTreeMap<String, Device>, ApiError>;
    async fn start_device_scan(&self) -> Result<(), ApiError>;
    async fn get_virtuals(&self) -> Result<VirtualsResponse, ApiError>;
    async fn get_scenes(&self) -> Result<BTreeMap<String, Scene>, ApiError>;

    async fn get_config(&self) -> Result<SystemConfig, ApiError>;
    async fn update_config(&self, patch: &serde_json::Value) -> Result<(), ApiError>;
    async fn get_info(&self) -> Result<SystemInfo, ApiError>;
}

#[async_trait]
impl Transport for ApiClient {
    async fn get_colors(&self) -> Result<ColorPalette, ApiError> {
        ApiClient::get_colors(self).await
    }

    async fn add_color(&self, name: &str, value: &str) -> Result<(), ApiError> {
        ApiClient::add_color(self, name, value).await
    }

    async fn delete_colors(&self, keys: &[String]) -> Result<(), ApiError> {
        ApiClient::delete_colors(self, keys).await
    }

    async fn get_integrations(&self) -> Result<IntegrationsResponse, ApiError> {
        ApiClient::get_integrations(self).await
    }

    async fn add_integration(&self, payload: &NewIntegration) -> Result<(), ApiError> {
        ApiClient::add_integration(self, payload).await
    }

    async fn update_integration(&self, payload: &UpdateIntegration) -> Result<(), ApiError> {
        ApiClient::update_integration(self, payload).await
    }

    async fn toggle_integration(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::toggle_integration(self, id).await
    }

    async fn delete_integration(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::delete_integration(self, id).await
    }

    async fn add_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError> {
        ApiClient::add_song_trigger(self, trigger).await
    }

    async fn edit_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError> {
        ApiClient::edit_song_trigger(self, trigger).await
    }

    async fn toggle_song_trigger(
        &self,
        spotify_id: &str,
        config: &serde_json::Value,
    ) -> Result<(), ApiError> {
        ApiClient::toggle_song_trigger(self, spotify_id, config).await
    }

    async fn delete_song_trigger(&self, key: &TriggerKey) -> Result<(), ApiError> {
        ApiClient::delete_song_trigger(self, key).await
    }

    async fn get_devices(&self) -> Result<BTreeMap<String, Device>, ApiError> {
        ApiClient::get_devices(self).await
    }

    async fn start_device_scan(&self) -> Result<(), ApiError> {
        ApiClient::start_device_scan(self).await
    }

    async fn get_virtuals(&self) -> Result<VirtualsResponse, ApiError> {
        ApiClient::get_virtuals(self).await
    }

    async fn get_scenes(&self) -> Result<BTreeMap<String, Scene>, ApiError> {
        ApiClient::get_scenes(self).await
    }

    async fn get_config(&self) -> Result<SystemConfig, ApiError> {
        ApiClient::get_config(self).await
    }

    async fn update_config(&self, patch: &serde_json::Value) -> Result<(), ApiError> {
        ApiClient::update_config(self, patch).await
    }

    async fn get_info(&self) -> Result<SystemInfo, ApiError> {
        ApiClient::get_info(self).await
    }
}
