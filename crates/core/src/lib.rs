//! `lumx-core` -- shared domain types for the lumx data layer.
//!
//! Every backend resource mirrored by the client (colors, integrations,
//! Spotify triggers, devices, virtuals, scenes, system config) has a typed
//! schema here.  Schemas are deliberately tolerant: unknown fields are
//! captured in pass-through maps so a newer appliance firmware does not
//! break deserialization.

pub mod colors;
pub mod config;
pub mod devices;
pub mod info;
pub mod integrations;
pub mod region;
pub mod scenes;
pub mod spotify;
pub mod virtuals;

pub use region::Region;
