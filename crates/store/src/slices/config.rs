//! Config slice: system settings and feature flags.

use serde_json::json;

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct ConfigSlice;

impl ConfigSlice {
    /// Replace the config region with the full server configuration.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Config);
        let config = transport.get_config().await.inspect_err(|err| {
            warn_fetch_failed(Region::Config, err);
        })?;
        store.commit_fetch(ticket, "config/fetched", |state| state.config = config);
        Ok(())
    }

    /// Apply a partial settings patch. Top-level keys replace their
    /// counterparts on the appliance; re-fetch to see the result.
    pub async fn update(
        transport: &dyn Transport,
        patch: &serde_json::Value,
    ) -> Result<(), ApiError> {
        transport.update_config(patch).await
    }

    /// Persist one feature flag.
    ///
    /// The config endpoint merges top-level keys only, so the full flag
    /// map is sent with the one flag flipped.  The current map is read
    /// back from the appliance first rather than from the local cache,
    /// so a cold or stale cache cannot silently clear server-side
    /// flags.  Like every mutation, writes nothing locally.
    pub async fn set_feature(
        transport: &dyn Transport,
        name: &str,
        enabled: bool,
    ) -> Result<(), ApiError> {
        let mut features = transport.get_config().await?.features;
        features.set(name, enabled);
        transport
            .update_config(&json!({ "features": features }))
            .await
    }
}
