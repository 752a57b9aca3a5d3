//! Appliance identity (`/api/info`).

use serde::{Deserialize, Serialize};

/// Static information about the appliance, fetched once at connect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Base URL the appliance believes it is reachable at.
    pub url: String,
    pub name: String,
    pub version: String,
    /// Commit hash of the firmware build, `"unknown"` for local builds.
    #[serde(default)]
    pub github_sha: Option<String>,
    /// The backend sends this as a lowercase string, not a boolean.
    #[serde(default)]
    pub is_release: Option<String>,
    #[serde(default)]
    pub developer_mode: bool,
}
