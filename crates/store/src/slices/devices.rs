//! Devices slice: physical LED devices.

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct DevicesSlice;

impl DevicesSlice {
    /// Replace the devices region with the server map.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Devices);
        let devices = transport.get_devices().await.inspect_err(|err| {
            warn_fetch_failed(Region::Devices, err);
        })?;
        store.commit_fetch(ticket, "devices/fetched", |state| state.devices = devices);
        Ok(())
    }
}
