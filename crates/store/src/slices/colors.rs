//! Colors slice: the `/api/colors` palette.

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct ColorsSlice;

impl ColorsSlice {
    /// Replace the colors region with the server palette.
    ///
    /// The user/builtin split inside each bank round-trips verbatim.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Colors);
        let palette = transport.get_colors().await.inspect_err(|err| {
            warn_fetch_failed(Region::Colors, err);
        })?;
        store.commit_fetch(ticket, "colors/fetched", |state| state.colors = palette);
        Ok(())
    }

    /// Register a user color or gradient. Re-fetch to see it locally.
    pub async fn add(transport: &dyn Transport, name: &str, value: &str) -> Result<(), ApiError> {
        transport.add_color(name, value).await
    }

    /// Delete user colors by key. Re-fetch to see the removal locally.
    pub async fn delete(transport: &dyn Transport, keys: &[String]) -> Result<(), ApiError> {
        transport.delete_colors(keys).await
    }
}
