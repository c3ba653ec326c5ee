//! Dashboard state and the events that drive it.
//!
//! ```text
//! user input ──┐                      ┌── Navigation
//!              ├─▶ DashboardState ────┼── UploadSimulation ──┐
//! Scheduler ───┘     ::dispatch       ├── VerifySimulation ──┼─▶ Notifications
//!      ▲                              └── ProfileForm ───────┘
//!      └──────── timers armed by the controllers ◀──┘
//! ```
//!
//! [`DashboardState`] owns every slot; the views only read it and send
//! [`Event`]s back. Timers are requested through a [`Scheduler`] passed by
//! reference on each call, so the same state runs under the virtual clock
//! and in the browser.

mod navigation;
mod profile;
mod toast;
mod upload;
mod verify;

pub use navigation::Navigation;
pub use profile::ProfileForm;
pub use toast::Notifications;
pub use upload::{UploadOutcome, UploadPhase, UploadSimulation, MAX_PROGRESS};
pub use verify::{VerifyOutcome, VerifySimulation};

use crate::config::SimulationConfig;
use crate::data;
use crate::models::{FileRecord, FileSelection, NavigationTarget, ProfileTab};
use crate::timer::Scheduler;

pub const UPLOAD_SUCCESS: &str = "File Uploaded Successfully";
pub const VERIFY_SUCCESS: &str = "File Verified Successfully";
pub const PROFILE_UPDATED: &str = "Profile Updated";

/// Everything that can happen to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User input
    Navigate(NavigationTarget),
    ToggleDrawer,
    UploadFileChosen(FileSelection),
    VerifyFileChosen(FileSelection),
    DismissToast,
    Logout,
    ProfileTab(ProfileTab),
    ProfileEdited { name: String, email: String },
    ProfileSubmitted,
    InspectFile(u32),
    CloseInspector,

    // Timers
    UploadTick,
    VerifyElapsed,
    ToastExpired(u64),
}

/// Root owner of all dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    config: SimulationConfig,
    navigation: Navigation,
    upload: UploadSimulation,
    verify: VerifySimulation,
    toast: Notifications,
    profile: ProfileForm,
    inspected: Option<u32>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            navigation: Navigation::new(),
            upload: UploadSimulation::new(&config),
            verify: VerifySimulation::new(&config),
            toast: Notifications::new(&config),
            profile: ProfileForm::default(),
            inspected: None,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn upload(&self) -> &UploadSimulation {
        &self.upload
    }

    pub fn verify(&self) -> &VerifySimulation {
        &self.verify
    }

    pub fn toast(&self) -> &Notifications {
        &self.toast
    }

    pub fn profile(&self) -> &ProfileForm {
        &self.profile
    }

    /// Record opened in the details dialog.
    pub fn inspected(&self) -> Option<&'static FileRecord> {
        self.inspected.and_then(data::find_file)
    }

    /// Apply one event.
    ///
    /// Returns the notification shown as a consequence, if any.
    pub fn dispatch<S: Scheduler<Event>>(&mut self, event: Event, scheduler: &mut S) -> Option<String> {
        match event {
            Event::Navigate(target) => {
                self.navigation.select(target);
                None
            }
            Event::ToggleDrawer => {
                self.navigation.toggle_drawer();
                None
            }
            Event::UploadFileChosen(selection) => {
                self.upload.file_chosen(&selection, scheduler);
                None
            }
            Event::UploadTick => match self.upload.tick(scheduler) {
                UploadOutcome::Completed => self.notify(UPLOAD_SUCCESS, scheduler),
                _ => None,
            },
            Event::VerifyFileChosen(selection) => {
                self.verify.file_chosen(&selection, scheduler);
                None
            }
            Event::VerifyElapsed => match self.verify.elapsed(scheduler) {
                VerifyOutcome::Completed => self.notify(VERIFY_SUCCESS, scheduler),
                _ => None,
            },
            Event::DismissToast => {
                self.toast.hide(scheduler);
                None
            }
            Event::ToastExpired(generation) => {
                self.toast.expired(generation, scheduler);
                None
            }
            Event::Logout => {
                // Session handling lives outside this app.
                log::info!("Logout requested");
                None
            }
            Event::ProfileTab(tab) => {
                self.profile.select_tab(tab);
                None
            }
            Event::ProfileEdited { name, email } => {
                self.profile.edit(name, email);
                None
            }
            Event::ProfileSubmitted => {
                self.profile.submit();
                self.notify(PROFILE_UPDATED, scheduler)
            }
            Event::InspectFile(id) => {
                if data::find_file(id).is_some() {
                    self.inspected = Some(id);
                } else {
                    log::warn!("No file with id {}", id);
                }
                None
            }
            Event::CloseInspector => {
                self.inspected = None;
                None
            }
        }
    }

    /// Cancel every timer still owned by the state.
    pub fn teardown<S: Scheduler<Event>>(&mut self, scheduler: &mut S) {
        self.upload.teardown(scheduler);
        self.verify.teardown(scheduler);
        self.toast.teardown(scheduler);
    }

    fn notify<S: Scheduler<Event>>(&mut self, message: &str, scheduler: &mut S) -> Option<String> {
        self.toast.show(message, scheduler);
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;

    #[test]
    fn test_navigation_and_drawer_events() {
        let mut sched = VirtualScheduler::new();
        let mut state = DashboardState::default();
        state.dispatch(Event::ToggleDrawer, &mut sched);
        assert!(state.navigation().drawer_open());
        state.dispatch(Event::Navigate(NavigationTarget::Profile), &mut sched);
        assert_eq!(state.navigation().current(), NavigationTarget::Profile);
        assert!(!state.navigation().drawer_open());
    }

    #[test]
    fn test_profile_submit_notifies() {
        let mut sched = VirtualScheduler::new();
        let mut state = DashboardState::default();
        state.dispatch(
            Event::ProfileEdited { name: "Ada".into(), email: "ada@example.com".into() },
            &mut sched,
        );
        let shown = state.dispatch(Event::ProfileSubmitted, &mut sched);
        assert_eq!(shown.as_deref(), Some(PROFILE_UPDATED));
        assert_eq!(state.profile().saved().name, "Ada");
        assert_eq!(state.toast().message(), Some(PROFILE_UPDATED));
    }

    #[test]
    fn test_single_field_edits_keep_the_other_field() {
        let mut sched = VirtualScheduler::new();
        let mut state = DashboardState::default();
        let email = state.profile().draft().email.clone();
        state.dispatch(Event::ProfileEdited { name: "Ada".into(), email }, &mut sched);

        let name = state.profile().draft().name.clone();
        state.dispatch(Event::ProfileEdited { name, email: "ada@example.com".into() }, &mut sched);

        assert_eq!(state.profile().draft().name, "Ada");
        assert_eq!(state.profile().draft().email, "ada@example.com");
        assert!(state.profile().is_dirty());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_inspector() {
        let mut sched = VirtualScheduler::new();
        let mut state = DashboardState::default();
        state.dispatch(Event::InspectFile(2), &mut sched);
        assert_eq!(state.inspected().map(|f| f.name.as_str()), Some("image.jpg"));

        state.dispatch(Event::InspectFile(99), &mut sched);
        assert_eq!(state.inspected().map(|f| f.id), Some(2));

        state.dispatch(Event::CloseInspector, &mut sched);
        assert!(state.inspected().is_none());
    }

    #[test]
    fn test_logout_changes_nothing() {
        let mut sched = VirtualScheduler::new();
        let mut state = DashboardState::default();
        assert_eq!(state.dispatch(Event::Logout, &mut sched), None);
        assert_eq!(state.navigation().current(), NavigationTarget::Dashboard);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_teardown_cancels_every_flow() {
        let mut sched = VirtualScheduler::new();
        let mut state = DashboardState::default();
        state.dispatch(Event::UploadFileChosen(FileSelection::named("a", 1)), &mut sched);
        state.dispatch(Event::VerifyFileChosen(FileSelection::named("b", 1)), &mut sched);
        state.dispatch(Event::ProfileSubmitted, &mut sched);
        assert_eq!(sched.pending(), 3);

        state.teardown(&mut sched);
        assert_eq!(sched.pending(), 0);
    }
}
