//! Virtual-time driver for [`DashboardState`].
//!
//! Runs the dashboard without a browser: events go in through
//! [`SimulatedDashboard::send`], time moves with
//! [`SimulatedDashboard::advance`]. Due timers fire one at a time, in
//! expiry order, each dispatched into the state before the next one is
//! picked, so a timer cancelled by an earlier callback never fires.

use std::time::Duration;

use crate::config::SimulationConfig;
use crate::state::{DashboardState, Event};
use crate::timer::VirtualScheduler;

/// A notification emitted at a point in virtual time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub at: Duration,
    pub message: String,
}

pub struct SimulatedDashboard {
    state: DashboardState,
    scheduler: VirtualScheduler<Event>,
    notices: Vec<Notice>,
}

impl Default for SimulatedDashboard {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl SimulatedDashboard {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            state: DashboardState::new(config),
            scheduler: VirtualScheduler::new(),
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn scheduler(&self) -> &VirtualScheduler<Event> {
        &self.scheduler
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Every notification shown so far.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Dispatch a user event at the current virtual time.
    pub fn send(&mut self, event: Event) {
        self.apply(event);
    }

    /// Let `duration` of virtual time pass.
    pub fn advance(&mut self, duration: Duration) {
        let until = self.now() + duration;
        self.advance_to(until, |_, _, _| {});
    }

    pub fn advance_ms(&mut self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Fire everything due up to `until`, calling `observe` after each timer.
    pub fn advance_to<F>(&mut self, until: Duration, mut observe: F)
    where
        F: FnMut(Duration, &Event, &DashboardState),
    {
        while let Some((_, event)) = self.scheduler.pop_due(until) {
            let at = self.scheduler.now();
            self.apply(event.clone());
            observe(at, &event, &self.state);
        }
        self.scheduler.set_now(until);
    }

    /// Cancel every live timer, as when the view unmounts.
    pub fn teardown(&mut self) {
        self.state.teardown(&mut self.scheduler);
        // Anything left is not owned by the state anymore.
        self.scheduler.cancel_all();
    }

    fn apply(&mut self, event: Event) {
        if let Some(message) = self.state.dispatch(event, &mut self.scheduler) {
            self.notices.push(Notice {
                at: self.scheduler.now(),
                message,
            });
        }
    }
}
