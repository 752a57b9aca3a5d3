//! Integration tests for the device-scan polling workflow, run under a
//! paused tokio clock so thirty one-second ticks cost nothing.

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use tokio_util::sync::CancellationToken;

use common::{server_error, Call, StubTransport};
use lumx_client::ApiError;
use lumx_store::{scan, Store};

/// An uncancelled scan steps 0..=30 and returns to the idle sentinel,
/// refreshing devices and virtuals on every tick.
#[tokio::test(start_paused = true)]
async fn scan_runs_thirty_ticks_then_goes_idle() {
    let stub = StubTransport::new();
    let store = Store::new();
    let mut rx = store.subscribe();
    let cancel = CancellationToken::new();

    scan::run(&stub, &store, &cancel).await.unwrap();

    assert_eq!(store.snapshot().scan_progress, scan::IDLE);

    let mut actions = Vec::new();
    while let Ok(update) = rx.try_recv() {
        actions.push(update.action);
    }
    assert_eq!(actions.first(), Some(&"scan/started"));
    assert_eq!(actions.last(), Some(&"scan/finished"));
    assert_eq!(actions.iter().filter(|a| **a == "scan/tick").count(), 30);

    let calls = stub.calls();
    assert_eq!(
        calls.iter().filter(|c| **c == Call::StartDeviceScan).count(),
        1
    );
    assert_eq!(calls.iter().filter(|c| **c == Call::GetDevices).count(), 30);
    assert_eq!(calls.iter().filter(|c| **c == Call::GetVirtuals).count(), 30);
}

/// Cancelling mid-scan stops polling and resets the sentinel. The
/// progress counter reflects completed ticks while the scan runs.
#[tokio::test(start_paused = true)]
async fn cancelled_scan_resets_progress_to_idle() {
    let stub = Arc::new(StubTransport::new());
    let store = Arc::new(Store::new());
    let cancel = CancellationToken::new();

    let handle = {
        let (stub, store, cancel) = (stub.clone(), store.clone(), cancel.clone());
        tokio::spawn(async move { scan::run(stub.as_ref(), &store, &cancel).await })
    };

    // Three ticks elapse, then the cancel lands mid-wait for the fourth.
    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(store.snapshot().scan_progress, 3);

    cancel.cancel();
    handle.await.unwrap().unwrap();

    assert_eq!(store.snapshot().scan_progress, scan::IDLE);
    assert_eq!(
        stub.calls().iter().filter(|c| **c == Call::GetDevices).count(),
        3
    );
}

/// A failed scan start surfaces the error, resets the sentinel, and
/// polls nothing.
#[tokio::test(start_paused = true)]
async fn failed_scan_start_resets_to_idle_without_polling() {
    let stub = StubTransport::new();
    stub.queue_scan_start(Err(server_error()));
    let store = Store::new();
    let cancel = CancellationToken::new();

    let result = scan::run(&stub, &store, &cancel).await;

    assert_matches!(result, Err(ApiError::Api { status: 500, .. }));
    assert_eq!(store.snapshot().scan_progress, scan::IDLE);
    assert!(!stub.calls().contains(&Call::GetDevices));
}

/// A refresh failure during a tick keeps the scan alive; the next tick
/// retries and the scan still completes.
#[tokio::test(start_paused = true)]
async fn refresh_failure_does_not_abort_scan() {
    let stub = StubTransport::new();
    stub.queue_devices(Err(server_error()));
    let store = Store::new();
    let cancel = CancellationToken::new();

    scan::run(&stub, &store, &cancel).await.unwrap();

    assert_eq!(store.snapshot().scan_progress, scan::IDLE);
    assert_eq!(
        stub.calls().iter().filter(|c| **c == Call::GetDevices).count(),
        30
    );
}
