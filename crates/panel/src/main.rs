//! `lumx-panel` -- headless control-panel session against an appliance.
//!
//! Connects to the appliance REST API, mirrors every region into the
//! local store, logs a dashboard-style summary, and optionally runs a
//! device-discovery scan.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default | Description                                  |
//! |---------------------|----------|---------|----------------------------------------------|
//! | `LUMX_BASE_URL`     | yes      | --      | Appliance base URL, e.g. `http://host:8888`  |
//! | `LUMX_TIMEOUT_SECS` | no       | `10`    | Per-request HTTP timeout                     |
//! | `LUMX_SCAN`         | no       | unset   | If set, run a device scan after the sync     |

use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumx_client::ApiClient;
use lumx_store::{refresh_all, scan, Store};

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumx=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("LUMX_BASE_URL")
        .context("LUMX_BASE_URL environment variable is required")?;

    let timeout_secs: u64 = std::env::var("LUMX_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("failed to build HTTP client")?;
    let client = ApiClient::with_client(http, base_url);
    let store = Store::new();

    tracing::info!(base_url = client.base_url(), timeout_secs, "Connecting to appliance");

    refresh_all(&client, &store)
        .await
        .context("initial sync failed")?;

    let state = store.snapshot();
    if let Some(info) = &state.info {
        tracing::info!(name = %info.name, version = %info.version, "Appliance identified");
    }
    tracing::info!(
        devices = state.devices.len(),
        devices_online = state.devices_online(),
        pixels = state.pixel_total(),
        pixels_online = state.pixel_total_online(),
        virtuals = state.user_virtuals().count(),
        scenes = state.scenes.len(),
        colors = state.colors.len(),
        integrations = state.integrations.len(),
        "Initial sync complete",
    );

    if std::env::var("LUMX_SCAN").is_ok() {
        run_scan(&client, &store).await?;
    }

    Ok(())
}

/// Run one device scan, cancellable with Ctrl-C.
///
/// Cancelling stops the polling loop; a scan already running on the
/// appliance continues server-side.
async fn run_scan(client: &ApiClient, store: &Store) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();

    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received, stopping scan");
                cancel.cancel();
            }
        })
    };

    tracing::info!("Starting device scan");
    scan::run(client, store, &cancel).await.context("device scan failed")?;
    watcher.abort();

    let state = store.snapshot();
    tracing::info!(
        devices = state.devices.len(),
        devices_online = state.devices_online(),
        "Device scan complete",
    );
    Ok(())
}
