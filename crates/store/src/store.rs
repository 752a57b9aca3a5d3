//! Shared state container with change notifications.
//!
//! [`Store`] holds the aggregate [`StoreState`] behind a lock and fans
//! out a [`StoreUpdate`] on a `tokio::sync::broadcast` channel after
//! every mutation, so any number of consumers can re-render on change.
//!
//! Fetches are guarded by per-region generation counters: a fetch that
//! was superseded by a newer one for the same region is discarded at
//! commit time, so a slow old response can never overwrite newer data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use tokio::sync::broadcast;

use lumx_core::region::{Region, REGION_COUNT};

use crate::state::StoreState;

/// Default buffer capacity for the change-notification channel.
const DEFAULT_CAPACITY: usize = 256;

/// Notification that one region changed.
///
/// Carries no data; consumers read [`Store::snapshot`] for the new value.
#[derive(Debug, Clone)]
pub struct StoreUpdate {
    pub region: Region,
    /// Static action tag for tracing, e.g. `"colors/fetched"`.
    pub action: &'static str,
}

/// Ticket returned by [`Store::begin_fetch`], consumed by
/// [`Store::commit_fetch`].
#[derive(Debug)]
pub struct FetchTicket {
    region: Region,
    generation: u64,
}

/// The shared state container.
pub struct Store {
    state: RwLock<StoreState>,
    updates: broadcast::Sender<StoreUpdate>,
    generations: [AtomicU64; REGION_COUNT],
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self {
            state: RwLock::new(StoreState::default()),
            updates,
            generations: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.read().clone()
    }

    /// Subscribe to change notifications.
    ///
    /// Slow receivers that fall behind the channel capacity observe a
    /// `RecvError::Lagged` and should re-read the snapshot.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreUpdate> {
        self.updates.subscribe()
    }

    /// Apply a mutation and notify subscribers.
    ///
    /// The closure runs under the write lock and must not block; all
    /// network I/O happens before `set` is called.  Subscribers are
    /// notified synchronously after the lock is released.
    pub fn set<F>(&self, region: Region, action: &'static str, f: F)
    where
        F: FnOnce(&mut StoreState),
    {
        {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            f(&mut state);
        }
        tracing::debug!(region = %region, action, "store updated");
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.updates.send(StoreUpdate { region, action });
    }

    /// Start a fetch for a region, superseding any fetch still in flight.
    pub fn begin_fetch(&self, region: Region) -> FetchTicket {
        let generation = self.generations[region.index()].fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket { region, generation }
    }

    /// Commit a completed fetch.
    ///
    /// Applies the mutation only if no newer fetch has begun for the
    /// same region since the ticket was issued.  Returns whether the
    /// mutation was applied.
    pub fn commit_fetch<F>(&self, ticket: FetchTicket, action: &'static str, f: F) -> bool
    where
        F: FnOnce(&mut StoreState),
    {
        let latest = self.generations[ticket.region.index()].load(Ordering::SeqCst);
        if ticket.generation != latest {
            tracing::debug!(
                region = %ticket.region,
                stale = ticket.generation,
                latest,
                "discarding superseded fetch",
            );
            return false;
        }
        self.set(ticket.region, action, f);
        true
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
