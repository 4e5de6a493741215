//! Loads the dashboard snapshot and tracks its loading/error/data state.
//!
//! At most one fetch is in flight per [`SnapshotFetcher`]; a call made while
//! another is pending returns [`FetchOutcome::Skipped`] and changes nothing.
//! A failed fetch keeps the last good snapshot alongside the error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use donezo_core::types::DashboardSnapshot;

use crate::api::ApiError;

/// Shown when the backend gives no reason for a failed load.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load dashboard data.";

/// Produces complete dashboard snapshots.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self, token: Option<&str>) -> Result<DashboardSnapshot, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Dashboard fetch failed: {0}")]
    Api(#[from] ApiError),

    /// No session token is available; the caller should show the login page.
    #[error("Not signed in")]
    Unauthenticated,
}

impl FetchError {
    /// Banner text for the retry prompt.
    pub fn user_message(&self) -> &str {
        match self {
            FetchError::Api(e) => e.server_message().unwrap_or(FETCH_FAILED_MESSAGE),
            FetchError::Unauthenticated => "Sign in to load the dashboard.",
        }
    }
}

/// What the consumer renders from.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    /// A request is in flight.
    pub loading: bool,
    /// Message from the most recent failure, cleared when a new fetch starts.
    pub error: Option<String>,
    /// Last successfully loaded snapshot.
    pub data: Option<Arc<DashboardSnapshot>>,
}

#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Arc<DashboardSnapshot>),
    Failed(FetchError),
    /// Another fetch was already in flight.
    Skipped,
}

pub struct SnapshotFetcher<S> {
    source: S,
    in_flight: AtomicBool,
    state: Mutex<FetchState>,
}

impl<S: SnapshotSource> SnapshotFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(FetchState::default()),
        }
    }

    /// Fetch a fresh snapshot, replacing the current one on success.
    pub async fn fetch(&self, token: Option<&str>) -> FetchOutcome {
        let Some(_flight) = InFlight::begin(self) else {
            tracing::debug!("Dashboard fetch already in flight, skipping");
            return FetchOutcome::Skipped;
        };

        tracing::debug!("Fetching dashboard snapshot");
        let result = self.source.fetch_snapshot(token).await;

        let mut state = self.lock_state();
        match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                tracing::info!(
                    users = snapshot.users.len(),
                    products = snapshot.products.len(),
                    analytics = snapshot.analytics.len(),
                    "Dashboard snapshot loaded",
                );
                state.data = Some(Arc::clone(&snapshot));
                state.error = None;
                FetchOutcome::Loaded(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dashboard snapshot failed to load");
                let err = FetchError::from(e);
                state.error = Some(err.user_message().to_string());
                FetchOutcome::Failed(err)
            }
        }
    }

    pub fn state(&self) -> FetchState {
        self.lock_state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        self.lock_state().data.clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, FetchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks a fetch as in flight for as long as it lives. Dropping it, even
/// when the fetch future is cancelled, clears the flag and `loading`.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    state: &'a Mutex<FetchState>,
}

impl<'a> InFlight<'a> {
    fn begin<S: SnapshotSource>(fetcher: &'a SnapshotFetcher<S>) -> Option<Self> {
        fetcher
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        let mut state = fetcher.lock_state();
        state.loading = true;
        state.error = None;

        Some(Self {
            flag: &fetcher.in_flight,
            state: &fetcher.state,
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = false;
        self.flag.store(false, Ordering::Release);
    }
}
