//! Scenes slice: saved effect snapshots.

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct ScenesSlice;

impl ScenesSlice {
    /// Replace the scenes region with the server map.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Scenes);
        let scenes = transport.get_scenes().await.inspect_err(|err| {
            warn_fetch_failed(Region::Scenes, err);
        })?;
        store.commit_fetch(ticket, "scenes/fetched", |state| state.scenes = scenes);
        Ok(())
    }
}
