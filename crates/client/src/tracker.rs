//! Time tracker card: a one-second ticking clock that can be paused.
//!
//! The ticking task is owned by the [`TimeTracker`] and is cancelled when
//! the tracker is stopped or dropped.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use donezo_core::format::format_hms;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Elapsed time shown when the card first appears (1:24:08).
pub const INITIAL_ELAPSED_SECS: u64 = 3600 + 24 * 60 + 8;

const TICK: Duration = Duration::from_secs(1);

pub struct TimeTracker {
    elapsed: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TimeTracker {
    /// Start a running tracker at [`INITIAL_ELAPSED_SECS`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start() -> Self {
        Self::start_at(INITIAL_ELAPSED_SECS)
    }

    pub fn start_at(elapsed_secs: u64) -> Self {
        let elapsed = Arc::new(AtomicU64::new(elapsed_secs));
        let running = Arc::new(AtomicBool::new(true));
        let cancel = CancellationToken::new();

        let task = tokio::spawn(tick_loop(
            Arc::clone(&elapsed),
            Arc::clone(&running),
            cancel.clone(),
        ));
        tracing::debug!(elapsed_secs, "Time tracker started");

        Self {
            elapsed,
            running,
            cancel,
            task: Some(task),
        }
    }

    pub fn pause(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn resume(&self) {
        self.running.store(true, Ordering::Release);
    }

    /// Flip between running and paused. Returns the new running state.
    pub fn toggle(&self) -> bool {
        !self.running.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Acquire)
    }

    /// `HH:MM:SS` for the card.
    pub fn display(&self) -> String {
        format_hms(self.elapsed_secs())
    }

    /// Cancel the ticking task and wait for it to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Time tracker task ended abnormally");
            }
        }
    }
}

impl Drop for TimeTracker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn tick_loop(elapsed: Arc<AtomicU64>, running: Arc<AtomicBool>, cancel: CancellationToken) {
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Time tracker stopped");
                return;
            }
            _ = ticker.tick() => {
                if running.load(Ordering::Acquire) {
                    elapsed.fetch_add(1, Ordering::AcqRel);
                }
            }
        }
    }
}
