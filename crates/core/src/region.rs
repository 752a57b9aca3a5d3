//! Region identifiers for the state container.
//!
//! Each [`Region`] names one slice-owned portion of the shared store.
//! Regions tag change notifications and index the per-region fetch
//! generation counters.

/// A named region of the shared state container.
///
/// Every region is owned by exactly one slice; only that slice writes it.
/// Cross-region reads are allowed (the dashboard reads several at once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Colors,
    Integrations,
    Spotify,
    Devices,
    Virtuals,
    Scenes,
    Config,
    Info,
    /// Client-local device-scan progress. Not a server mirror, so it has
    /// no fetch generation.
    Scan,
}

/// Number of regions, for fixed-size per-region bookkeeping.
pub const REGION_COUNT: usize = 9;

impl Region {
    /// Stable lowercase name used in logs and change notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Integrations => "integrations",
            Self::Spotify => "spotify",
            Self::Devices => "devices",
            Self::Virtuals => "virtuals",
            Self::Scenes => "scenes",
            Self::Config => "config",
            Self::Info => "info",
            Self::Scan => "scan",
        }
    }

    /// Dense index for per-region counters.
    pub fn index(&self) -> usize {
        match self {
            Self::Colors => 0,
            Self::Integrations => 1,
            Self::Spotify => 2,
            Self::Devices => 3,
            Self::Virtuals => 4,
            Self::Scenes => 5,
            Self::Config => 6,
            Self::Info => 7,
            Self::Scan => 8,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
