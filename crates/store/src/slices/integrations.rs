//! Integrations slice: the `/api/integrations` map.

use lumx_client::{ApiError, Transport};
use lumx_core::integrations::{NewIntegration, UpdateIntegration};
use lumx_core::region::Region;

use crate::store::Store;

use super::warn_fetch_failed;

pub struct IntegrationsSlice;

impl IntegrationsSlice {
    /// Replace the integrations region with the server map.
    ///
    /// The same response also carries Spotify triggers; those belong to
    /// [`super::SpotifySlice`] and are not written here.
    pub async fn fetch(transport: &dyn Transport, store: &Store) -> Result<(), ApiError> {
        let ticket = store.begin_fetch(Region::Integrations);
        let response = transport.get_integrations().await.inspect_err(|err| {
            warn_fetch_failed(Region::Integrations, err);
        })?;
        store.commit_fetch(ticket, "integrations/fetched", |state| {
            state.integrations = response.integrations;
        });
        Ok(())
    }

    /// Create an integration; the appliance assigns the id.
    pub async fn add(transport: &dyn Transport, payload: &NewIntegration) -> Result<(), ApiError> {
        transport.add_integration(payload).await
    }

    /// Reconfigure an existing integration.
    pub async fn update(
        transport: &dyn Transport,
        payload: &UpdateIntegration,
    ) -> Result<(), ApiError> {
        transport.update_integration(payload).await
    }

    /// Flip an integration's enabled flag.
    pub async fn toggle(transport: &dyn Transport, id: &str) -> Result<(), ApiError> {
        transport.toggle_integration(id).await
    }

    /// Remove an integration by server-issued id.
    pub async fn delete(transport: &dyn Transport, id: &str) -> Result<(), ApiError> {
        transport.delete_integration(id).await
    }
}
