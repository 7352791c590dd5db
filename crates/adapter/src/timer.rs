//! Gravity timer backed by tokio tasks.
//!
//! Every schedule spawns one interval task that posts [`SessionEvent::Tick`] into
//! the session queue. Cancelling aborts the task; ticks it already queued carry
//! the old id and are dropped by the controller.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

use tourney_tetris_core::{TimerId, TimerService};

use crate::runtime::SessionEvent;

/// Timer service for sessions running inside a tokio runtime
///
/// Must be used from within the runtime: scheduling spawns a task.
#[derive(Debug)]
pub struct TokioTimer {
    tx: mpsc::Sender<SessionEvent>,
    last_id: u32,
    tasks: Vec<(TimerId, JoinHandle<()>)>,
}

impl TokioTimer {
    pub fn new(tx: mpsc::Sender<SessionEvent>) -> Self {
        Self {
            tx,
            last_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Number of schedules that are still running
    pub fn running(&self) -> usize {
        self.tasks.len()
    }
}

impl TimerService for TokioTimer {
    fn schedule(&mut self, interval_ms: u32) -> TimerId {
        self.last_id = self.last_id.wrapping_add(1).max(1);
        let id = TimerId::new(self.last_id);

        let tx = self.tx.clone();
        let period = Duration::from_millis(u64::from(interval_ms.max(1)));
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match tx.try_send(SessionEvent::Tick(id)) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                }
            }
        });

        self.tasks.push((id, handle));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.tasks.retain(|(task_id, handle)| {
            if *task_id == id {
                handle.abort();
                false
            } else {
                true
            }
        });
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain(..) {
            handle.abort();
        }
    }
}
