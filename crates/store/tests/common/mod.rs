//! Stub transport for exercising the store contract without a network.
//!
//! Each endpoint has a queue of canned results; an empty queue yields a
//! default success so tests only configure what they assert on.  Every
//! invocation is recorded as a [`Call`] for wire-contract assertions.

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use lumx_client::{ApiError, IntegrationsResponse, Transport, VirtualsResponse};
use lumx_core::colors::ColorPalette;
use lumx_core::config::SystemConfig;
use lumx_core::devices::Device;
use lumx_core::info::SystemInfo;
use lumx_core::integrations::{NewIntegration, UpdateIntegration};
use lumx_core::scenes::Scene;
use lumx_core::spotify::{SpotifyTrigger, TriggerKey};

/// One recorded transport invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetColors,
    AddColor { name: String, value: String },
    DeleteColors { keys: Vec<String> },
    GetIntegrations,
    AddIntegration { kind: String },
    UpdateIntegration { id: String },
    ToggleIntegration { id: String },
    DeleteIntegration { id: String },
    AddSongTrigger { song_id: String },
    EditSongTrigger { song_id: String },
    ToggleSongTrigger { spotify_id: String },
    DeleteSongTrigger { scene_id: String, song_id: String },
    GetDevices,
    StartDeviceScan,
    GetVirtuals,
    GetScenes,
    GetConfig,
    UpdateConfig { patch: serde_json::Value },
    GetInfo,
}

#[derive(Default)]
pub struct StubTransport {
    calls: Mutex<Vec<Call>>,
    colors: Mutex<VecDeque<Result<ColorPalette, ApiError>>>,
    integrations: Mutex<VecDeque<Result<IntegrationsResponse, ApiError>>>,
    devices: Mutex<VecDeque<Result<BTreeMap<String, Device>, ApiError>>>,
    virtuals: Mutex<VecDeque<Result<VirtualsResponse, ApiError>>>,
    scenes: Mutex<VecDeque<Result<BTreeMap<String, Scene>, ApiError>>>,
    config: Mutex<VecDeque<Result<SystemConfig, ApiError>>>,
    info: Mutex<VecDeque<Result<SystemInfo, ApiError>>>,
    scan_start: Mutex<VecDeque<Result<(), ApiError>>>,
}

/// A generic backend failure for error-path tests.
pub fn server_error() -> ApiError {
    ApiError::Api {
        status: 500,
        body: "internal error".to_string(),
    }
}

/// A schema-mismatch failure for the given endpoint, as the transport
/// reports when a 2xx body fails typed deserialization.
pub fn decode_error(endpoint: &str) -> ApiError {
    let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    }
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queue_colors(&self, result: Result<ColorPalette, ApiError>) {
        self.colors.lock().unwrap().push_back(result);
    }

    pub fn queue_integrations(&self, result: Result<IntegrationsResponse, ApiError>) {
        self.integrations.lock().unwrap().push_back(result);
    }

    pub fn queue_devices(&self, result: Result<BTreeMap<String, Device>, ApiError>) {
        self.devices.lock().unwrap().push_back(result);
    }

    pub fn queue_virtuals(&self, result: Result<VirtualsResponse, ApiError>) {
        self.virtuals.lock().unwrap().push_back(result);
    }

    pub fn queue_scenes(&self, result: Result<BTreeMap<String, Scene>, ApiError>) {
        self.scenes.lock().unwrap().push_back(result);
    }

    pub fn queue_config(&self, result: Result<SystemConfig, ApiError>) {
        self.config.lock().unwrap().push_back(result);
    }

    pub fn queue_info(&self, result: Result<SystemInfo, ApiError>) {
        self.info.lock().unwrap().push_back(result);
    }

    pub fn queue_scan_start(&self, result: Result<(), ApiError>) {
        self.scan_start.lock().unwrap().push_back(result);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn pop<T: Default>(queue: &Mutex<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(T::default()))
    }
}

fn default_info() -> SystemInfo {
    SystemInfo {
        url: "http://localhost:8888".to_string(),
        name: "LED Controller".to_string(),
        version: "2.0.94".to_string(),
        github_sha: Some("unknown".to_string()),
        is_release: Some("false".to_string()),
        developer_mode: false,
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get_colors(&self) -> Result<ColorPalette, ApiError> {
        self.record(Call::GetColors);
        Self::pop(&self.colors)
    }

    async fn add_color(&self, name: &str, value: &str) -> Result<(), ApiError> {
        self.record(Call::AddColor {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    async fn delete_colors(&self, keys: &[String]) -> Result<(), ApiError> {
        self.record(Call::DeleteColors {
            keys: keys.to_vec(),
        });
        Ok(())
    }

    async fn get_integrations(&self) -> Result<IntegrationsResponse, ApiError> {
        self.record(Call::GetIntegrations);
        Self::pop(&self.integrations)
    }

    async fn add_integration(&self, payload: &NewIntegration) -> Result<(), ApiError> {
        self.record(Call::AddIntegration {
            kind: payload.kind.clone(),
        });
        Ok(())
    }

    async fn update_integration(&self, payload: &UpdateIntegration) -> Result<(), ApiError> {
        self.record(Call::UpdateIntegration {
            id: payload.id.clone(),
        });
        Ok(())
    }

    async fn toggle_integration(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::ToggleIntegration { id: id.to_string() });
        Ok(())
    }

    async fn delete_integration(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteIntegration { id: id.to_string() });
        Ok(())
    }

    async fn add_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError> {
        self.record(Call::AddSongTrigger {
            song_id: trigger.song_id.clone(),
        });
        Ok(())
    }

    async fn edit_song_trigger(&self, trigger: &SpotifyTrigger) -> Result<(), ApiError> {
        self.record(Call::EditSongTrigger {
            song_id: trigger.song_id.clone(),
        });
        Ok(())
    }

    async fn toggle_song_trigger(
        &self,
        spotify_id: &str,
        _config: &serde_json::Value,
    ) -> Result<(), ApiError> {
        self.record(Call::ToggleSongTrigger {
            spotify_id: spotify_id.to_string(),
        });
        Ok(())
    }

    async fn delete_song_trigger(&self, key: &TriggerKey) -> Result<(), ApiError> {
        self.record(Call::DeleteSongTrigger {
            scene_id: key.scene_id.clone(),
            song_id: key.song_id.clone(),
        });
        Ok(())
    }

    async fn get_devices(&self) -> Result<BTreeMap<String, Device>, ApiError> {
        self.record(Call::GetDevices);
        Self::pop(&self.devices)
    }

    async fn start_device_scan(&self) -> Result<(), ApiError> {
        self.record(Call::StartDeviceScan);
        Self::pop(&self.scan_start)
    }

    async fn get_virtuals(&self) -> Result<VirtualsResponse, ApiError> {
        self.record(Call::GetVirtuals);
        Self::pop(&self.virtuals)
    }

    async fn get_scenes(&self) -> Result<BTreeMap<String, Scene>, ApiError> {
        self.record(Call::GetScenes);
        Self::pop(&self.scenes)
    }

    async fn get_config(&self) -> Result<SystemConfig, ApiError> {
        self.record(Call::GetConfig);
        Self::pop(&self.config)
    }

    async fn update_config(&self, patch: &serde_json::Value) -> Result<(), ApiError> {
        self.record(Call::UpdateConfig {
            patch: patch.clone(),
        });
        Ok(())
    }

    async fn get_info(&self) -> Result<SystemInfo, ApiError> {
        self.record(Call::GetInfo);
        self.info
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(default_info()))
    }
}
