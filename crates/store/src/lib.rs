//! `lumx-store` -- cached client-side state for the appliance.
//!
//! The [`Store`] mirrors the last known server state across typed
//! regions; [`slices`] provide the per-resource fetch/mutate actions and
//! [`scan`] the bounded device-discovery workflow.  Data flows one way:
//! action -> transport -> backend -> response -> region replace ->
//! subscriber notification.

pub mod scan;
pub mod slices;
pub mod state;
pub mod store;

pub use state::StoreState;
pub use store::{Store, StoreUpdate};

use lumx_client::{ApiError, Transport};
use slices::{
    ColorsSlice, ConfigSlice, DevicesSlice, InfoSlice, IntegrationsSlice, ScenesSlice,
    SpotifySlice, VirtualsSlice,
};

/// Resynchronize every region from the appliance, concurrently.
///
/// Fails fast on the first transport error; regions that already
/// fetched keep their new values, the rest keep their cached ones.
pub async fn refresh_all(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
    futures::try_join!(
        InfoSlice::fetch(transport, store),
        ConfigSlice::fetch(transport, store),
        DevicesSlice::fetch(transport, store),
        VirtualsSlice::fetch(transport, store),
        ScenesSlice::fetch(transport, store),
        ColorsSlice::fetch(transport, store),
        IntegrationsSlice::fetch(transport, store),
        SpotifySlice::fetch(transport, store),
    )?;
    Ok(())
}
