//! Reactive wrapper around the core [`DashboardState`].
//!
//! The store is `Copy`: components receive it as a prop, read through
//! [`DashboardStore::with`] and write through [`DashboardStore::dispatch`].

use filechain::{DashboardState, Event, SimulationConfig};
use leptos::*;

use super::timers::{BoundScheduler, BrowserTimers};

#[derive(Clone, Copy)]
pub struct DashboardStore {
    state: RwSignal<DashboardState>,
    timers: StoredValue<BrowserTimers>,
}

impl DashboardStore {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            state: create_rw_signal(DashboardState::new(config)),
            timers: store_value(BrowserTimers::default()),
        }
    }

    /// Tracked read of the state.
    pub fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.state.with(f)
    }

    /// Untracked read, for event handlers.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.state.with_untracked(f)
    }

    /// Apply an event. Timers armed by the state fire back into this store.
    pub fn dispatch(&self, event: Event) {
        let store = *self;
        let state = self.state;
        self.timers.update_value(move |timers| {
            let mut scheduler = BoundScheduler { timers, store };
            state.update(|s| {
                if let Some(message) = s.dispatch(event, &mut scheduler) {
                    log::debug!("Toast: {}", message);
                }
            });
        });
    }

    /// Release every timer. Called when the dashboard unmounts.
    ///
    /// Tolerates a store whose signals are already disposed.
    pub fn teardown(&self) {
        let store = *self;
        let state = self.state;
        self.timers.try_update_value(move |timers| {
            let mut scheduler = BoundScheduler { timers, store };
            state.try_update_untracked(|s| s.teardown(&mut scheduler));
            scheduler.timers.cancel_all();
        });
    }
}
