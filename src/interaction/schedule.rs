use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

use super::source::{EventSource, Subscription};

pub type Task = Box<dyn Fn() + Send + Sync>;

#[derive(Error, Debug, Clone)]
pub enum ScheduleError {
    #[error("Couldn't install periodic timer: {0}")]
    Unavailable(String),
}

/// Something that can run a task on a fixed period until cancelled.
pub trait Scheduler {
    fn every(&self, period: Duration, task: Task) -> Result<Subscription, ScheduleError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Deterministic scheduler: periods are recorded, ticks fire only on [`advance`].
///
/// [`advance`]: ManualScheduler::advance
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    ticks: EventSource<Tick>,
    periods: Arc<Mutex<Vec<Duration>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ticks: usize) {
        for _ in 0..ticks {
            self.ticks.emit(&Tick);
        }
    }

    pub fn active_tasks(&self) -> usize {
        self.ticks.listener_count()
    }

    /// Every period ever requested, in order, including cancelled tasks.
    pub fn scheduled_periods(&self) -> Vec<Duration> {
        self.periods
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, task: Task) -> Result<Subscription, ScheduleError> {
        self.periods
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(period);
        Ok(self.ticks.subscribe(move |_| task()))
    }
}
