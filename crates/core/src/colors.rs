//! Color and gradient palettes.
//!
//! The appliance partitions both flat colors and gradients into a `user`
//! bank (mutable, deletable) and a `builtin` bank (read-only, seeded by
//! the backend).  The split round-trips verbatim through fetches; the
//! client never re-shuffles entries between banks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One named bank of color definitions, split by origin.
///
/// Values are CSS-style color strings (`"#rrggbb"`) for flat colors and
/// `linear-gradient(...)` expressions for gradients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBank {
    /// User-defined entries. These are the only deletable keys.
    #[serde(default)]
    pub user: BTreeMap<String, String>,
    /// Backend-seeded entries. Read-only on the client.
    #[serde(default)]
    pub builtin: BTreeMap<String, String>,
}

/// The full `/api/colors` payload: flat colors plus gradients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    #[serde(default)]
    pub colors: ColorBank,
    #[serde(default)]
    pub gradients: ColorBank,
}

impl ColorPalette {
    /// Total number of entries across both banks of both kinds.
    pub fn len(&self) -> usize {
        self.colors.user.len()
            + self.colors.builtin.len()
            + self.gradients.user.len()
            + self.gradients.builtin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
