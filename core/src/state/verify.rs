//! Simulated verification: one delayed callback, no progress.

use std::time::Duration;

use super::Event;
use crate::config::SimulationConfig;
use crate::models::FileSelection;
use crate::timer::{Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Started,
    Completed,
    /// A verification is already pending.
    Rejected,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct VerifySimulation {
    delay: Duration,
    pending: Option<TimerHandle>,
    file_name: Option<String>,
}

impl VerifySimulation {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            delay: config.verify_delay(),
            pending: None,
            file_name: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn file_chosen<S: Scheduler<Event>>(
        &mut self,
        selection: &FileSelection,
        scheduler: &mut S,
    ) -> VerifyOutcome {
        let Some(name) = selection.name.as_deref() else {
            return VerifyOutcome::Ignored;
        };
        if self.is_pending() {
            log::warn!("Verification already pending, ignoring {:?}", name);
            return VerifyOutcome::Rejected;
        }

        log::info!("🔍 Verifying {}", name);
        self.file_name = Some(name.to_string());
        self.pending = Some(scheduler.set_timeout(self.delay, Event::VerifyElapsed));
        VerifyOutcome::Started
    }

    pub fn elapsed<S: Scheduler<Event>>(&mut self, scheduler: &mut S) -> VerifyOutcome {
        match self.pending.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                log::info!("✅ Verified {}", self.file_name.as_deref().unwrap_or_default());
                VerifyOutcome::Completed
            }
            None => VerifyOutcome::Ignored,
        }
    }

    pub fn teardown<S: Scheduler<Event>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;

    fn drain(verify: &mut VerifySimulation, sched: &mut VirtualScheduler<Event>, until_ms: u64) -> Vec<VerifyOutcome> {
        let mut outcomes = Vec::new();
        while let Some((_, event)) = sched.pop_due(Duration::from_millis(until_ms)) {
            assert_eq!(event, Event::VerifyElapsed);
            outcomes.push(verify.elapsed(sched));
        }
        outcomes
    }

    #[test]
    fn test_completes_after_exact_delay() {
        let mut sched = VirtualScheduler::new();
        let mut verify = VerifySimulation::new(&SimulationConfig::default());
        assert_eq!(
            verify.file_chosen(&FileSelection::named("deed.pdf", 10), &mut sched),
            VerifyOutcome::Started
        );

        assert!(drain(&mut verify, &mut sched, 1999).is_empty());
        assert!(verify.is_pending());
        assert_eq!(drain(&mut verify, &mut sched, 2000), vec![VerifyOutcome::Completed]);
        assert!(!verify.is_pending());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_second_file_while_pending_is_rejected() {
        let mut sched = VirtualScheduler::new();
        let mut verify = VerifySimulation::new(&SimulationConfig::default());
        verify.file_chosen(&FileSelection::named("a.txt", 1), &mut sched);
        assert_eq!(
            verify.file_chosen(&FileSelection::named("b.txt", 1), &mut sched),
            VerifyOutcome::Rejected
        );
        assert_eq!(sched.pending(), 1);
        assert_eq!(drain(&mut verify, &mut sched, 10_000), vec![VerifyOutcome::Completed]);
        assert_eq!(verify.file_name(), Some("a.txt"));
    }

    #[test]
    fn test_stray_elapsed_and_teardown() {
        let mut sched = VirtualScheduler::new();
        let mut verify = VerifySimulation::new(&SimulationConfig::default());
        assert_eq!(verify.elapsed(&mut sched), VerifyOutcome::Ignored);
        assert_eq!(verify.file_chosen(&FileSelection::empty(), &mut sched), VerifyOutcome::Ignored);

        verify.file_chosen(&FileSelection::named("a.txt", 1), &mut sched);
        verify.teardown(&mut sched);
        assert_eq!(sched.pending(), 0);
        assert!(!verify.is_pending());
    }
}
