//! Bounded device-scan polling workflow.
//!
//! The appliance discovers devices server-side; the client observes
//! progress by re-fetching devices and virtuals once per second for up
//! to thirty ticks.  Progress lives in the store's scan region: the
//! idle sentinel [`IDLE`] outside a scan, otherwise the completed tick
//! count.
//!
//! Cancellation is client-side only: triggering the token stops polling
//! and resets the sentinel, but the appliance exposes no scan-cancel
//! endpoint, so a server-side scan may keep running to completion.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use lumx_client::{ApiError, Transport};
use lumx_core::region::Region;

use crate::slices::{DevicesSlice, VirtualsSlice};
use crate::store::Store;

/// Scan-progress value when no scan is running.
pub const IDLE: i32 = -1;

/// Ceiling on polling ticks before the scan is considered done.
pub const MAX_TICKS: u32 = 30;

/// Delay between polling ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Run one device scan to completion, ceiling, or cancellation.
///
/// Progress transitions: [`IDLE`] -> 0 on start -> 1..=[`MAX_TICKS`] in
/// [`TICK_INTERVAL`] steps -> back to [`IDLE`].  The sentinel is reset
/// on every exit path, including a failed scan start.
pub async fn run(
    transport: &dyn Transport,
    store: &Store,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    store.set(Region::Scan, "scan/started", |state| state.scan_progress = 0);
    let result = drive(transport, store, cancel).await;
    store.set(Region::Scan, "scan/finished", |state| {
        state.scan_progress = IDLE;
    });
    result
}

async fn drive(
    transport: &dyn Transport,
    store: &Store,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    transport.start_device_scan().await?;

    for tick in 1..=MAX_TICKS {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(tick, "Device scan cancelled");
                return Ok(());
            }
            _ = tokio::time::sleep(TICK_INTERVAL) => {}
        }

        // A failed refresh leaves the region stale but does not abort
        // the scan; the next tick retries.
        if let Err(err) = DevicesSlice::fetch(transport, store).await {
            tracing::warn!(tick, error = %err, "Device refresh failed during scan");
        }
        if let Err(err) = VirtualsSlice::fetch(transport, store).await {
            tracing::warn!(tick, error = %err, "Virtual refresh failed during scan");
        }

        store.set(Region::Scan, "scan/tick", |state| {
            state.scan_progress = tick as i32;
        });
    }

    tracing::info!("Device scan finished after {MAX_TICKS} ticks");
    Ok(())
}
