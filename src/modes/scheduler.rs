//! Fixed-cadence tick source for the simulation.
//!
//! The engine never schedules itself. The host starts the scheduler when a run
//! begins and stops it when the run ends or is reset; while stopped, [`next`]
//! never resolves, so it can sit in a `select!` unconditionally.
//!
//! [`next`]: TickScheduler::next

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub struct TickScheduler {
    period: Duration,
    timer: Option<Interval>,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    /// Begin ticking; the first tick lands one full period from now
    pub fn start(&mut self) {
        let mut timer = interval_at(Instant::now() + self.period, self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
    }

    /// Stop ticking; safe to call when already stopped
    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Wait for the next tick
    pub async fn next(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
