//! Domain slices: per-resource actions over the shared store.
//!
//! Every slice follows the same contract:
//!
//! 1. Its region has a concrete default present before any fetch.
//! 2. `fetch` replaces the region wholesale on success and leaves the
//!    prior value untouched on failure (stale-but-valid over data loss).
//! 3. Mutations call the transport and never write local state. Callers
//!    re-fetch afterwards to resynchronize; the cache can therefore
//!    trail the server by at most one round trip.
//! 4. Deletes and toggles address resources by server-issued identifier.
//!
//! Mutation methods take only the transport, so writing the store from
//! a mutation is impossible by construction.

mod colors;
mod config;
mod devices;
mod info;
mod integrations;
mod scenes;
mod spotify;
mod virtuals;

pub use colors::ColorsSlice;
pub use config::ConfigSlice;
pub use devices::DevicesSlice;
pub use info::InfoSlice;
pub use integrations::IntegrationsSlice;
pub use scenes::ScenesSlice;
pub use spotify::SpotifySlice;
pub use virtuals::VirtualsSlice;

use lumx_client::ApiError;
use lumx_core::region::Region;

/// Shared warn path for failed fetches; the region keeps its cached value.
pub(crate) fn warn_fetch_failed(region: Region, err: &ApiError) {
    tracing::warn!(region = %region, error = %err, "Fetch failed, keeping cached region");
}
