//! Scoped background task for periodic refreshes.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::{ControllerState, DashboardController};
use crate::core::BdClient;

/// Handle to the repeating auto-refresh task.
///
/// Acquired from [`DashboardController::start_auto_refresh`]; dropping it
/// aborts the task. The task holds only a [`Weak`] reference to the
/// controller state and exits on its own if the controller is dropped first,
/// so a leaked tick can never mutate disposed state.
#[derive(Debug)]
pub struct AutoRefreshHandle {
    task: JoinHandle<()>,
}

impl AutoRefreshHandle {
    pub(super) fn spawn(
        client: BdClient,
        inner: Weak<RwLock<ControllerState>>,
        every: Duration,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval yields immediately; the initial load belongs to
            // `init()`, so swallow the first tick.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(inner) = inner.upgrade() else {
                    debug!("controller dropped; stopping auto-refresh");
                    break;
                };
                let controller = DashboardController {
                    client: client.clone(),
                    inner,
                };
                debug!("auto-refresh tick");
                controller.refresh().await;
            }
        });

        Self { task }
    }

    /// Stop the schedule. Equivalent to dropping the handle.
    pub fn stop(self) {}
}

impl Drop for AutoRefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
