//! Single-slot toast with auto-dismiss.
//!
//! A new message replaces the current one and restarts the dismiss timer.
//! The previous timer is cancelled and every timer carries the generation
//! of the message it belongs to, so a late expiry never hides a newer
//! message.

use std::time::Duration;

use super::Event;
use crate::config::SimulationConfig;
use crate::timer::{Scheduler, TimerHandle};

#[derive(Debug, Clone)]
pub struct Notifications {
    duration: Duration,
    message: Option<String>,
    timer: Option<TimerHandle>,
    generation: u64,
}

impl Notifications {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            duration: config.toast_duration(),
            message: None,
            timer: None,
            generation: 0,
        }
    }

    /// Message currently on screen.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Pending dismiss timer, if any.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn show<S: Scheduler<Event>>(&mut self, message: impl Into<String>, scheduler: &mut S) {
        self.release(scheduler);
        self.generation += 1;
        let message = message.into();
        log::info!("🔔 {}", message);
        self.message = Some(message);
        self.timer = Some(scheduler.set_timeout(self.duration, Event::ToastExpired(self.generation)));
    }

    pub fn hide<S: Scheduler<Event>>(&mut self, scheduler: &mut S) {
        self.release(scheduler);
        self.message = None;
    }

    /// Dismiss timer fired. Returns whether the toast was hidden.
    pub fn expired<S: Scheduler<Event>>(&mut self, generation: u64, scheduler: &mut S) -> bool {
        if generation != self.generation || self.message.is_none() {
            log::debug!("Ignoring stale toast expiry {} (current {})", generation, self.generation);
            return false;
        }
        self.hide(scheduler);
        true
    }

    /// Release the dismiss timer and clear the slot. A message without a
    /// pending timer would never go away.
    pub fn teardown<S: Scheduler<Event>>(&mut self, scheduler: &mut S) {
        self.hide(scheduler);
    }

    fn release<S: Scheduler<Event>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;

    fn drain(toast: &mut Notifications, sched: &mut VirtualScheduler<Event>, until_ms: u64) {
        while let Some((_, event)) = sched.pop_due(Duration::from_millis(until_ms)) {
            match event {
                Event::ToastExpired(generation) => {
                    toast.expired(generation, sched);
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
        sched.set_now(Duration::from_millis(until_ms));
    }

    #[test]
    fn test_auto_dismiss_after_duration() {
        let mut sched = VirtualScheduler::new();
        let mut toast = Notifications::new(&SimulationConfig::default());
        toast.show("Hello", &mut sched);

        drain(&mut toast, &mut sched, 2999);
        assert_eq!(toast.message(), Some("Hello"));
        drain(&mut toast, &mut sched, 3000);
        assert!(!toast.is_visible());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_explicit_hide_cancels_timer() {
        let mut sched = VirtualScheduler::new();
        let mut toast = Notifications::new(&SimulationConfig::default());
        toast.show("Hello", &mut sched);
        toast.hide(&mut sched);
        assert!(!toast.is_visible());
        assert_eq!(toast.timer(), None);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_second_show_replaces_and_restarts_timer() {
        let mut sched = VirtualScheduler::new();
        let mut toast = Notifications::new(&SimulationConfig::default());
        toast.show("first", &mut sched);
        drain(&mut toast, &mut sched, 1000);
        toast.show("second", &mut sched);

        assert_eq!(toast.message(), Some("second"));
        assert_eq!(sched.pending(), 1);

        // The first message's deadline (3000) must not hide the second one.
        drain(&mut toast, &mut sched, 3500);
        assert_eq!(toast.message(), Some("second"));
        drain(&mut toast, &mut sched, 4000);
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut sched = VirtualScheduler::new();
        let mut toast = Notifications::new(&SimulationConfig::default());
        toast.show("first", &mut sched);
        toast.show("second", &mut sched);
        assert!(!toast.expired(1, &mut sched));
        assert_eq!(toast.message(), Some("second"));
        assert!(toast.expired(2, &mut sched));
    }

    #[test]
    fn test_teardown_clears_message_and_timer() {
        let mut sched = VirtualScheduler::new();
        let mut toast = Notifications::new(&SimulationConfig::default());
        toast.show("Hello", &mut sched);
        toast.teardown(&mut sched);
        assert!(!toast.is_visible());
        assert_eq!(sched.pending(), 0);

        toast.show("Again", &mut sched);
        drain(&mut toast, &mut sched, 3000);
        assert!(!toast.is_visible());
    }
}
