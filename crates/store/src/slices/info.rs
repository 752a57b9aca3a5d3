//! Info slice: appliance identity, fetched once at connect.

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct InfoSlice;

impl InfoSlice {
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Info);
        let info = transport.get_info().await.inspect_err(|err| {
            warn_fetch_failed(Region::Info, err);
        })?;
        store.commit_fetch(ticket, "info/fetched", |state| state.info = Some(info));
        Ok(())
    }
}
