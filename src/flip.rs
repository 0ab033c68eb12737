//! Flip cadence - a periodic toggle that runs only while a drag is live

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::warn;

/// Periodic flip toggle bound to a drag session.
///
/// `start` spawns a task on the current tokio runtime that flips the state
/// every `period`, first flip one period after start. Outside a runtime it
/// leaves the state unflipped. `stop` aborts the task
/// and forces the state back to `false`. Dropping the driver aborts any
/// running task.
#[derive(Debug)]
pub struct FlipDriver {
    period: Duration,
    state: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl FlipDriver {
    pub fn new(period: Duration) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            period,
            state,
            task: None,
        }
    }

    pub fn is_flipped(&self) -> bool {
        *self.state.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Observe flip changes (e.g. to schedule redraws)
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Start toggling; a running task is replaced so ticks restart from now.
    pub fn start(&mut self) {
        self.abort();

        let Ok(runtime) = Handle::try_current() else {
            warn!("No tokio runtime, flip cadence disabled");
            return;
        };
        let tx = self.state.clone();
        let period = self.period;
        self.task = Some(runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tx.send_modify(|flipped| *flipped = !*flipped);
            }
        }));
    }

    /// Stop toggling and reset to the unflipped orientation
    pub fn stop(&mut self) {
        self.abort();
        self.state.send_if_modified(|flipped| std::mem::replace(flipped, false));
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for FlipDriver {
    fn drop(&mut self) {
        self.abort();
    }
}
