//! The aggregate client-side state.
//!
//! [`StoreState`] is a cache of the last known server state, never an
//! independent source of truth.  Any region may be stale between a
//! triggering action and the confirming fetch.

use std::collections::BTreeMap;

use lumx_core::colors::ColorPalette;
use lumx_core::config::SystemConfig;
use lumx_core::devices::Device;
use lumx_core::info::SystemInfo;
use lumx_core::integrations::Integration;
use lumx_core::scenes::Scene;
use lumx_core::spotify::SpotifyTrigger;
use lumx_core::virtuals::Virtual;

use crate::scan;

/// All mirrored regions plus client-local scan progress.
///
/// Each field is owned by exactly one slice; see [`crate::slices`].
#[derive(Debug, Clone)]
pub struct StoreState {
    pub colors: ColorPalette,
    pub integrations: BTreeMap<String, Integration>,
    pub spotify_triggers: BTreeMap<String, SpotifyTrigger>,
    pub devices: BTreeMap<String, Device>,
    pub virtuals: BTreeMap<String, Virtual>,
    /// Global pause flag across all virtuals; part of the virtuals region.
    pub paused: bool,
    pub scenes: BTreeMap<String, Scene>,
    pub config: SystemConfig,
    /// Appliance identity, absent until the first `/api/info` fetch.
    pub info: Option<SystemInfo>,
    /// Device-scan progress: [`scan::IDLE`] when no scan runs, otherwise
    /// the number of completed one-second ticks (0..=30).
    pub scan_progress: i32,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            colors: ColorPalette::default(),
            integrations: BTreeMap::new(),
            spotify_triggers: BTreeMap::new(),
            devices: BTreeMap::new(),
            virtuals: BTreeMap::new(),
            paused: false,
            scenes: BTreeMap::new(),
            config: SystemConfig::default(),
            info: None,
            scan_progress: scan::IDLE,
        }
    }
}

impl StoreState {
    /// Sum of configured pixels across all devices.
    pub fn pixel_total(&self) -> u64 {
        self.devices
            .values()
            .map(|d| u64::from(d.config.pixel_count))
            .sum()
    }

    /// Sum of configured pixels across online devices only.
    pub fn pixel_total_online(&self) -> u64 {
        self.devices
            .values()
            .filter(|d| d.online)
            .map(|d| u64::from(d.config.pixel_count))
            .sum()
    }

    /// Number of devices that answered their last health check.
    pub fn devices_online(&self) -> usize {
        self.devices.values().filter(|d| d.online).count()
    }

    /// Virtuals created by the user, excluding the auto-generated
    /// one-per-device mirrors.
    pub fn user_virtuals(&self) -> impl Iterator<Item = &Virtual> {
        self.virtuals.values().filter(|v| !v.is_device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumx_core::devices::DeviceConfig;

    fn device(id: &str, pixels: u32, online: bool) -> Device {
        Device {
            id: id.to_string(),
            kind: "wled".to_string(),
            online,
            config: DeviceConfig {
                name: id.to_string(),
                pixel_count: pixels,
                ..DeviceConfig::default()
            },
        }
    }

    #[test]
    fn default_state_is_idle_and_empty() {
        let state = StoreState::default();
        assert_eq!(state.scan_progress, scan::IDLE);
        assert!(state.colors.is_empty());
        assert!(state.info.is_none());
    }

    #[test]
    fn pixel_totals_split_by_online() {
        let mut state = StoreState::default();
        state.devices.insert("a".into(), device("a", 300, true));
        state.devices.insert("b".into(), device("b", 150, false));
        assert_eq!(state.pixel_total(), 450);
        assert_eq!(state.pixel_total_online(), 300);
        assert_eq!(state.devices_online(), 1);
    }
}
