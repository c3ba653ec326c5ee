//! Cancellable timers.
//!
//! State machines never touch a clock directly. They ask a [`Scheduler`]
//! to deliver an event later and keep the returned [`TimerHandle`] so they
//! can cancel it. Two implementations exist:
//!
//! - [`VirtualScheduler`] - deterministic virtual clock, used by tests and the CLI
//! - `BrowserScheduler` in the frontend crate, backed by `gloo-timers`
//!
//! Every handle is released exactly once: either by its owner on natural
//! completion, or by a teardown that cancels everything still live.

use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque id of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a raw id minted by a [`Scheduler`] implementation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Something that can deliver events of type `E` after a delay.
pub trait Scheduler<E> {
    /// Deliver `event` once, after `delay`.
    fn set_timeout(&mut self, delay: Duration, event: E) -> TimerHandle;

    /// Deliver `event` every `period` until cancelled.
    fn set_interval(&mut self, period: Duration, event: E) -> TimerHandle;

    /// Cancel a timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Shortest period an interval may have; a zero period would never let
/// the clock move forward.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
struct PendingTimer<E> {
    deadline: Duration,
    period: Option<Duration>,
    /// Scheduling order, breaks ties between equal deadlines
    seq: u64,
    event: E,
}

/// Deterministic scheduler over a virtual millisecond clock.
///
/// Time only moves when the owner calls [`VirtualScheduler::pop_due`] or
/// [`VirtualScheduler::set_now`]. Timers fire in deadline order; timers with
/// the same deadline fire in the order they were (re-)armed.
#[derive(Debug, Clone)]
pub struct VirtualScheduler<E> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: BTreeMap<TimerHandle, PendingTimer<E>>,
}

impl<E> Default for VirtualScheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            next_seq: 0,
            timers: BTreeMap::new(),
        }
    }
}

impl<E: Clone> VirtualScheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timers (one-shots not yet fired plus active intervals).
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Earliest deadline among live timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Move the clock forward without firing anything.
    ///
    /// The clock never goes backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock jumps to that timer's deadline. One-shot timers are
    /// removed; intervals are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let handle = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= until)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(h, _)| *h)?;

        let seq = self.bump_seq();
        let timer = self.timers.get_mut(&handle)?;
        self.now = self.now.max(timer.deadline);
        let event = timer.event.clone();

        match timer.period {
            Some(period) => {
                timer.deadline += period;
                timer.seq = seq;
            }
            None => {
                self.timers.remove(&handle);
            }
        }

        Some((handle, event))
    }

    /// Drop every live timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.insert(
            handle,
            PendingTimer {
                deadline: self.now + delay,
                period,
                seq,
                event,
            },
        );
        handle
    }
}

impl<E: Clone> Scheduler<E> for VirtualScheduler<E> {
    fn set_timeout(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.arm(delay, None, event)
    }

    fn set_interval(&mut self, period: Duration, event: E) -> TimerHandle {
        let period = period.max(MIN_INTERVAL);
        self.arm(period, Some(period), event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timeout_fires_once_at_deadline() {
        let mut sched = VirtualScheduler::new();
        let handle = sched.set_timeout(ms(2000), "done");

        assert_eq!(sched.pop_due(ms(1999)), None);
        assert_eq!(sched.pop_due(ms(2000)), Some((handle, "done")));
        assert_eq!(sched.now(), ms(2000));
        assert_eq!(sched.pop_due(ms(10_000)), None);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_interval_rearms_until_cancelled() {
        let mut sched = VirtualScheduler::new();
        let handle = sched.set_interval(ms(500), "tick");

        let mut fired = Vec::new();
        while let Some((_, ev)) = sched.pop_due(ms(1600)) {
            fired.push((sched.now(), ev));
        }
        assert_eq!(fired, vec![(ms(500), "tick"), (ms(1000), "tick"), (ms(1500), "tick")]);
        assert!(sched.is_active(handle));
        assert_eq!(sched.next_deadline(), Some(ms(2000)));

        sched.cancel(handle);
        assert!(!sched.is_active(handle));
        assert_eq!(sched.pop_due(ms(5000)), None);
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut sched = VirtualScheduler::new();
        sched.set_timeout(ms(100), 'a');
        sched.set_timeout(ms(50), 'b');
        sched.set_timeout(ms(100), 'c');

        let order: Vec<char> = std::iter::from_fn(|| sched.pop_due(ms(100)).map(|(_, e)| e)).collect();
        assert_eq!(order, vec!['b', 'a', 'c']);
    }

    #[test]
    fn test_cancel_unknown_handle_is_noop() {
        let mut sched: VirtualScheduler<()> = VirtualScheduler::new();
        sched.cancel(TimerHandle::from_raw(99));
        let h = sched.set_timeout(ms(1), ());
        sched.pop_due(ms(1));
        sched.cancel(h);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut sched = VirtualScheduler::new();
        sched.set_interval(Duration::ZERO, ());
        assert_eq!(sched.next_deadline(), Some(MIN_INTERVAL));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut sched: VirtualScheduler<()> = VirtualScheduler::new();
        sched.set_now(ms(300));
        sched.set_now(ms(100));
        assert_eq!(sched.now(), ms(300));
        sched.set_timeout(ms(10), ());
        assert_eq!(sched.next_deadline(), Some(ms(310)));
    }
}
