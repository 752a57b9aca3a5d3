//! REST API client for the appliance HTTP endpoints.
//!
//! Wraps the appliance API (colors, integrations, Spotify triggers,
//! devices, virtuals, scenes, config) using [`reqwest`].  One wire quirk
//! is preserved from the appliance contract: DELETE requests carry their
//! identifiers in a `data` field of the request body, not in the URL path.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use lumx_core::colors::ColorPalette;
use lumx_core::devices::Device;
use lumx_core::info::SystemInfo;
use lumx_core::integrations::{Integration, NewIntegration, UpdateIntegration};
use lumx_core::scenes::Scene;
use lumx_core::spotify::{SpotifyTrigger, TriggerKey};
use lumx_core::virtuals::Virtual;

use crate::error::ApiError;

/// HTTP client for a single appliance.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response envelope of `GET /api/integrations`.
///
/// Spotify song triggers ride along in the same response, nested under
/// their own key; the store splits them into a separate region.
#[derive(Debug, Default, Deserialize)]
pub struct IntegrationsResponse {
    #[serde(default)]
    pub integrations: BTreeMap<String, Integration>,
    #[serde(default)]
    pub spotify: BTreeMap<String, SpotifyTrigger>,
}

/// Response envelope of `GET /api/virtuals`.
#[derive(Debug, Default, Deserialize)]
pub struct VirtualsResponse {
    #[serde(default)]
    pub virtuals: BTreeMap<String, Virtual>,
    /// Global pause flag across all virtuals.
    #[serde(default)]
    pub paused: bool,
}

#[derive(Debug, Deserialize)]
struct DevicesEnvelope {
    #[serde(default)]
    devices: BTreeMap<String, Device>,
}

#[derive(Debug, Deserialize)]
struct ScenesEnvelope {
    #[serde(default)]
    scenes: BTreeMap<String, Scene>,
}

impl ApiClient {
    /// Create a new API client for an appliance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://192.168.1.40:8888`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful to share a pool or apply a request timeout).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base HTTP URL of the appliance.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- colors ----

    /// Fetch the full color and gradient palette.
    pub async fn get_colors(&self) -> Result<ColorPalette, ApiError> {
        self.get_json("/api/colors").await
    }

    /// Register a user color or gradient under `name`.
    pub async fn add_color(&self, name: &str, value: &str) -> Result<(), ApiError> {
        self.post_json("/api/colors", &add_color_body(name, value)).await
    }

    /// Delete user colors by key.
    pub async fn delete_colors(&self, keys: &[String]) -> Result<(), ApiError> {
        self.delete_json("/api/colors", &delete_keys_body(keys)).await
    }

    // ---- integrations ----

    /// Fetch all integrations plus nested Spotify triggers.
    pub async fn get_integrations(&self) -> Result<IntegrationsResponse, ApiError> {
        self.get_json("/api/integrations").await
    }

    /// Create an integration. The appliance assigns the id.
    pub async fn add_integration(&self, payload: &NewIntegration) -> Result<(), ApiError> {
        self.post_json("/api/integrations", payload).await
    }

    /// Reconfigure an existing integration.
    pub async fn update_integration(&self, payload: &UpdateIntegration) -> Result<(), ApiError> {
        self.post_json("/api/integrations", payload).await
    }

    /// Flip an integration's enabled flag.
    pub async fn toggle_integration(&self, id: &str) -> Result<(), ApiError> {
        self.put_json("/api/integrations", &json!({ "id": id })).await
    }

    /// Remove an integration by server-issued id.
    pub async fn delete_integration(&self, id: &str) -> Result<(), ApiError> {
        self.delete_json("/api/integrations", &delete_id_body(id)).await
    }

    // ---- spotify triggers ----

    /// Create a song trigger inside the Spotify integration.
    pub async fn add_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError> {
        self.post_json("/api/integrations/spotify/spotify", trigger).await
    }

    /// Replace an existing song trigger.
    pub async fn edit_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError> {
        self.put_json("/api/integrations/spotify/spotify", trigger).await
    }

    /// Flip a trigger's enabled flag. `config` is the Spotify
    /// integration's own configuration payload, opaque to the client.
    pub async fn toggle_song_trigger(
        &self,
        spotify_id: &str,
        config: &serde_json::Value,
    ) -> Result<(), ApiError> {
        self.put_json(&format!("/api/integrations/spotify/{spotify_id}"), config)
            .await
    }

    /// Remove a song trigger addressed by its scene/song pair.
    pub async fn delete_song_trigger(&self, key: &TriggerKey) -> Result<(), ApiError> {
        self.delete_json("/api/integrations/spotify/spotify", &delete_trigger_body(key))
            .await
    }

    // ---- devices, virtuals, scenes ----

    /// Fetch all physical devices.
    pub async fn get_devices(&self) -> Result<BTreeMap<String, Device>, ApiError> {
        let envelope: DevicesEnvelope = self.get_json("/api/devices").await?;
        Ok(envelope.devices)
    }

    /// Kick off a device discovery scan on the appliance.
    ///
    /// The scan runs server-side; progress is observed by re-fetching
    /// devices and virtuals. There is no cancel endpoint.
    pub async fn start_device_scan(&self) -> Result<(), ApiError> {
        self.post_json("/api/find_devices", &json!({})).await
    }

    /// Fetch all virtuals plus the global pause flag.
    pub async fn get_virtuals(&self) -> Result<VirtualsResponse, ApiError> {
        self.get_json("/api/virtuals").await
    }

    /// Fetch all saved scenes.
    pub async fn get_scenes(&self) -> Result<BTreeMap<String, Scene>, ApiError> {
        let envelope: ScenesEnvelope = self.get_json("/api/scenes").await?;
        Ok(envelope.scenes)
    }

    // ---- config & info ----

    /// Fetch the full system configuration.
    pub async fn get_config(&self) -> Result<lumx_core::config::SystemConfig, ApiError> {
        self.get_json("/api/config").await
    }

    /// Apply a partial config patch. Top-level keys in `patch` replace
    /// the corresponding keys on the appliance.
    pub async fn update_config(&self, patch: &serde_json::Value) -> Result<(), ApiError> {
        self.put_json("/api/config", patch).await
    }

    /// Fetch the appliance identity block.
    pub async fn get_info(&self) -> Result<SystemInfo, ApiError> {
        self.get_json("/api/info").await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    async fn delete_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or [`ApiError::Api`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    ///
    /// Reads the body as text first so a schema mismatch surfaces as
    /// [`ApiError::Decode`] naming the endpoint, not as a bare reqwest
    /// error.
    async fn parse_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        decode_body(path, &body)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Deserialize a 2xx body into the expected schema, surfacing a
/// mismatch as [`ApiError::Decode`] naming the endpoint.
fn decode_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        endpoint: path.to_string(),
        source,
    })
}

// Request body builders, kept as free functions so the wire shapes are
// testable without a socket.

fn add_color_body(name: &str, value: &str) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(name.to_string(), serde_json::Value::String(value.to_string()));
    serde_json::Value::Object(body)
}

fn delete_keys_body(keys: &[String]) -> serde_json::Value {
    json!({ "data": keys })
}

fn delete_id_body(id: &str) -> serde_json::Value {
    json!({ "data": { "id": id } })
}

fn delete_trigger_body(key: &TriggerKey) -> serde_json::Value {
    json!({ "data": key })
}
