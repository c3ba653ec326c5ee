//! Browser implementation of the core [`Scheduler`], on top of `gloo-timers`.
//!
//! `gloo` timers clear themselves when dropped, so owning them in a map is
//! enough to guarantee that nothing fires after [`BrowserTimers::cancel_all`]
//! (called when the dashboard unmounts).

use std::collections::HashMap;
use std::time::Duration;

use filechain::{Event, Scheduler, TimerHandle};
use gloo_timers::callback::{Interval, Timeout};

use super::DashboardStore;

enum BrowserTimer {
    Timeout(Timeout),
    Interval(Interval),
}

impl BrowserTimer {
    /// Clear the timer. The closure is handed to the JS GC instead of being
    /// dropped, since a timer may be cancelled from its own callback.
    fn cancel(self) {
        let closure = match self {
            BrowserTimer::Timeout(t) => t.cancel(),
            BrowserTimer::Interval(i) => i.cancel(),
        };
        let _ = closure.into_js_value();
    }
}

/// Live browser timers, keyed by the handle given to the state machines.
#[derive(Default)]
pub struct BrowserTimers {
    next_id: u64,
    live: HashMap<TimerHandle, BrowserTimer>,
}

impl BrowserTimers {
    pub fn cancel_all(&mut self) {
        let count = self.live.len();
        for (_, timer) in self.live.drain() {
            timer.cancel();
        }
        if count > 0 {
            log::debug!("⏹️ Cancelled {} pending timer(s)", count);
        }
    }

    fn insert(&mut self, timer: BrowserTimer) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::from_raw(self.next_id);
        self.live.insert(handle, timer);
        handle
    }
}

/// [`BrowserTimers`] bound to the store that receives the fired events.
pub struct BoundScheduler<'a> {
    pub timers: &'a mut BrowserTimers,
    pub store: DashboardStore,
}

impl Scheduler<Event> for BoundScheduler<'_> {
    fn set_timeout(&mut self, delay: Duration, event: Event) -> TimerHandle {
        let store = self.store;
        let millis = to_millis(delay);
        let timeout = Timeout::new(millis, move || store.dispatch(event));
        self.timers.insert(BrowserTimer::Timeout(timeout))
    }

    fn set_interval(&mut self, period: Duration, event: Event) -> TimerHandle {
        let store = self.store;
        let millis = to_millis(period).max(1);
        let interval = Interval::new(millis, move || store.dispatch(event.clone()));
        self.timers.insert(BrowserTimer::Interval(interval))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(timer) = self.timers.live.remove(&handle) {
            timer.cancel();
        }
    }
}

/// `setTimeout` takes a 32-bit millisecond count.
pub fn to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_millis_saturates() {
        assert_eq!(to_millis(Duration::from_millis(500)), 500);
        assert_eq!(to_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
    }
}
