//! Periodic expiry pass.
//!
//! Every interval the ticker expires rentals whose window has closed,
//! re-aggregates the totals and publishes them to subscribers. The returned
//! handle owns the task: `stop().await` ends it deterministically and
//! dropping the handle signals it to stop.

use crate::models::Totals;
use crate::state::SharedState;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct TickerHandle {
    is_running: Arc<AtomicBool>,
    shutdown: watch::Sender<bool>,
    totals: watch::Receiver<Totals>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::SeqCst)
    }

    /// Receiver that always holds the totals from the latest pass
    pub fn subscribe(&self) -> watch::Receiver<Totals> {
        self.totals.clone()
    }

    pub fn latest(&self) -> Totals {
        *self.totals.borrow()
    }

    /// Stop ticking and wait for the task to finish
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.is_running.store(false, Ordering::SeqCst);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Spawn the ticker on the current tokio runtime. One pass runs immediately
/// so subscribers start with fresh totals.
pub fn start_ticker(state: SharedState, interval: Duration) -> TickerHandle {
    let initial = state.lock().tick();
    let (totals_tx, totals_rx) = watch::channel(initial);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let is_running = Arc::new(AtomicBool::new(true));
    let is_running_clone = is_running.clone();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately and the initial pass is done
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let totals = state.lock().tick();
                    totals_tx.send_replace(totals);
                }
                // Only ever set to true, or closed with the handle
                _ = shutdown_rx.changed() => break,
            }
        }

        is_running_clone.store(false, Ordering::SeqCst);
        debug!("Ticker stopped");
    });

    debug!("Ticker started ({:?} interval)", interval);

    TickerHandle {
        is_running,
        shutdown: shutdown_tx,
        totals: totals_rx,
        task: Some(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RentalInput, RentalStatus};
    use crate::state::AppState;
    use crate::storage::MemoryStore;
    use crate::utils::ManualClock;
    use chrono::{TimeZone, Utc};

    fn setup() -> (SharedState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
        ));
        let state = AppState::load(Arc::new(MemoryStore::new()), clock.clone()).into_shared();
        (state, clock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_expires_and_publishes_totals() {
        let (state, clock) = setup();
        let rental = state
            .lock()
            .add_rental(RentalInput::new("Ayu", "CapCut", 15000).duration_days(1))
            .unwrap();

        let ticker = start_ticker(state.clone(), DEFAULT_TICK_INTERVAL);
        let mut totals = ticker.subscribe();
        assert_eq!(ticker.latest().active_count, 1);

        clock.advance(chrono::Duration::days(1) + chrono::Duration::seconds(1));
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(totals.has_changed().unwrap());
        assert_eq!(totals.borrow_and_update().active_count, 0);
        assert_eq!(
            state.lock().rental(rental.id).unwrap().status,
            RentalStatus::Expired
        );

        ticker.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_task() {
        let (state, _) = setup();
        let ticker = start_ticker(state, DEFAULT_TICK_INTERVAL);
        assert!(ticker.is_running());

        let running = ticker.is_running.clone();
        ticker.stop().await;
        assert!(!running.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_signals_shutdown() {
        let (state, _) = setup();
        let ticker = start_ticker(state, DEFAULT_TICK_INTERVAL);
        let running = ticker.is_running.clone();

        drop(ticker);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!running.load(Ordering::SeqCst));
    }
}
