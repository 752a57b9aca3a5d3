//! Virtuals slice: virtual lights plus the global pause flag.

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct VirtualsSlice;

impl VirtualsSlice {
    /// Replace the virtuals region with the server map.
    ///
    /// The pause flag arrives in the same envelope and is written in the
    /// same `set`, so subscribers never observe the two out of step.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Virtuals);
        let response = transport.get_virtuals().await.inspect_err(|err| {
            warn_fetch_failed(Region::Virtuals, err);
        })?;
        store.commit_fetch(ticket, "virtuals/fetched", |state| {
            state.virtuals = response.virtuals;
            state.paused = response.paused;
        });
        Ok(())
    }
}
