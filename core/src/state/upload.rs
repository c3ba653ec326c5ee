//! Simulated upload: Idle(0) -> Running(p) -> Complete(100).
//!
//! A choice of file arms an interval that adds a fixed step to the
//! progress on every tick. At 100 the interval is cancelled, exactly once,
//! and the run completes. A file chosen while a run is in flight is
//! rejected; a file chosen after completion starts a fresh run from 0.

use std::time::Duration;

use super::Event;
use crate::config::SimulationConfig;
use crate::data;
use crate::models::{FileSelection, UploadReceipt};
use crate::timer::{Scheduler, TimerHandle};

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Running,
    Complete,
}

/// What a call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A new run started at 0.
    Started,
    /// Progress moved to the given value.
    Progressed(u8),
    /// Progress reached 100, the ticker is gone.
    Completed,
    /// A run is already in flight.
    Rejected,
    /// Nothing to do (empty selection, stray tick).
    Ignored,
}

#[derive(Debug, Clone)]
pub struct UploadSimulation {
    phase: UploadPhase,
    progress: u8,
    step: u8,
    tick: Duration,
    ticker: Option<TimerHandle>,
    file_name: Option<String>,
}

impl UploadSimulation {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            phase: UploadPhase::Idle,
            progress: 0,
            step: config.upload_step.clamp(1, MAX_PROGRESS),
            tick: config.upload_tick(),
            ticker: None,
            file_name: None,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.phase == UploadPhase::Running
    }

    /// Whether the periodic tick is still armed.
    pub fn ticker(&self) -> Option<TimerHandle> {
        self.ticker
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The progress bar shows once the first tick landed.
    pub fn shows_progress(&self) -> bool {
        self.progress > 0
    }

    /// Result panel content, only once the run is complete.
    pub fn receipt(&self) -> Option<UploadReceipt> {
        (self.phase == UploadPhase::Complete).then(data::upload_receipt)
    }

    pub fn file_chosen<S: Scheduler<Event>>(
        &mut self,
        selection: &FileSelection,
        scheduler: &mut S,
    ) -> UploadOutcome {
        let Some(name) = selection.name.as_deref() else {
            return UploadOutcome::Ignored;
        };
        if self.is_running() {
            log::warn!(
                "Upload of {:?} already running at {}%, ignoring {:?}",
                self.file_name.as_deref().unwrap_or_default(),
                self.progress,
                name
            );
            return UploadOutcome::Rejected;
        }

        log::info!("📤 Uploading {} ({} bytes)", name, selection.size);
        self.phase = UploadPhase::Running;
        self.progress = 0;
        self.file_name = Some(name.to_string());
        self.ticker = Some(scheduler.set_interval(self.tick, Event::UploadTick));
        UploadOutcome::Started
    }

    pub fn tick<S: Scheduler<Event>>(&mut self, scheduler: &mut S) -> UploadOutcome {
        if !self.is_running() {
            return UploadOutcome::Ignored;
        }

        self.progress = self.progress.saturating_add(self.step).min(MAX_PROGRESS);
        if self.progress < MAX_PROGRESS {
            log::debug!("Upload progress {}%", self.progress);
            return UploadOutcome::Progressed(self.progress);
        }

        if let Some(handle) = self.ticker.take() {
            scheduler.cancel(handle);
        }
        self.phase = UploadPhase::Complete;
        log::info!("✅ Upload complete: {}", self.file_name.as_deref().unwrap_or_default());
        UploadOutcome::Completed
    }

    /// Release the ticker if one is still armed. An interrupted run goes
    /// back to Idle so the next file starts a fresh one.
    pub fn teardown<S: Scheduler<Event>>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.ticker.take() {
            scheduler.cancel(handle);
        }
        if self.is_running() {
            log::debug!("Upload interrupted at {}%", self.progress);
            self.phase = UploadPhase::Idle;
            self.progress = 0;
            self.file_name = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;

    fn file() -> FileSelection {
        FileSelection::named("report.pdf", 1024)
    }

    fn fire_all(
        upload: &mut UploadSimulation,
        sched: &mut VirtualScheduler<Event>,
        until_ms: u64,
    ) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::new();
        while let Some((_, event)) = sched.pop_due(Duration::from_millis(until_ms)) {
            assert_eq!(event, Event::UploadTick);
            outcomes.push(upload.tick(sched));
        }
        outcomes
    }

    #[test]
    fn test_progress_walks_in_steps_to_100() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        assert_eq!(upload.phase(), UploadPhase::Idle);
        assert_eq!(upload.file_chosen(&file(), &mut sched), UploadOutcome::Started);
        assert!(!upload.shows_progress());

        let outcomes = fire_all(&mut upload, &mut sched, 60_000);
        let expected: Vec<UploadOutcome> = (1..10)
            .map(|i| UploadOutcome::Progressed(i * 10))
            .chain(std::iter::once(UploadOutcome::Completed))
            .collect();
        assert_eq!(outcomes, expected);
        assert_eq!(upload.progress(), 100);
        assert_eq!(upload.phase(), UploadPhase::Complete);
        assert_eq!(upload.ticker(), None);
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.now(), Duration::from_millis(5000));
    }

    #[test]
    fn test_step_not_dividing_100_is_clamped() {
        let config = SimulationConfig { upload_step: 30, ..Default::default() };
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&config);
        upload.file_chosen(&file(), &mut sched);

        let outcomes = fire_all(&mut upload, &mut sched, 60_000);
        assert_eq!(
            outcomes,
            vec![
                UploadOutcome::Progressed(30),
                UploadOutcome::Progressed(60),
                UploadOutcome::Progressed(90),
                UploadOutcome::Completed,
            ]
        );
        assert_eq!(upload.progress(), 100);
    }

    #[test]
    fn test_second_file_while_running_is_rejected() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        upload.file_chosen(&file(), &mut sched);
        fire_all(&mut upload, &mut sched, 1000);
        assert_eq!(upload.progress(), 20);

        let outcome = upload.file_chosen(&FileSelection::named("other.png", 1), &mut sched);
        assert_eq!(outcome, UploadOutcome::Rejected);
        assert_eq!(sched.pending(), 1);
        assert_eq!(upload.file_name(), Some("report.pdf"));
        assert_eq!(upload.progress(), 20);
    }

    #[test]
    fn test_new_run_after_completion_restarts_from_zero() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        upload.file_chosen(&file(), &mut sched);
        fire_all(&mut upload, &mut sched, 5000);
        assert!(upload.receipt().is_some());

        assert_eq!(upload.file_chosen(&file(), &mut sched), UploadOutcome::Started);
        assert_eq!(upload.progress(), 0);
        assert!(upload.receipt().is_none());
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_empty_selection_and_stray_tick_are_ignored() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        assert_eq!(upload.file_chosen(&FileSelection::empty(), &mut sched), UploadOutcome::Ignored);
        assert_eq!(upload.tick(&mut sched), UploadOutcome::Ignored);
        assert_eq!(upload.progress(), 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_teardown_releases_ticker() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        upload.file_chosen(&file(), &mut sched);
        upload.teardown(&mut sched);
        assert_eq!(sched.pending(), 0);
        assert_eq!(upload.ticker(), None);
        assert_eq!(upload.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_new_run_after_interrupted_one() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        upload.file_chosen(&file(), &mut sched);
        fire_all(&mut upload, &mut sched, 1000);
        upload.teardown(&mut sched);
        assert_eq!(upload.progress(), 0);

        let other = FileSelection::named("other.png", 1);
        assert_eq!(upload.file_chosen(&other, &mut sched), UploadOutcome::Started);
        fire_all(&mut upload, &mut sched, 10_000);
        assert_eq!(upload.phase(), UploadPhase::Complete);
        assert_eq!(upload.file_name(), Some("other.png"));
    }

    #[test]
    fn test_teardown_keeps_completed_receipt() {
        let mut sched = VirtualScheduler::new();
        let mut upload = UploadSimulation::new(&SimulationConfig::default());
        upload.file_chosen(&file(), &mut sched);
        fire_all(&mut upload, &mut sched, 5000);
        upload.teardown(&mut sched);
        assert_eq!(upload.phase(), UploadPhase::Complete);
        assert!(upload.receipt().is_some());
    }
}
