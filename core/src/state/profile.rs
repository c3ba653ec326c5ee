//! Profile panel: tab selection and form echo.

use crate::data;
use crate::models::{ProfileTab, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    tab: ProfileTab,
    saved: UserProfile,
    draft: UserProfile,
}

impl Default for ProfileForm {
    fn default() -> Self {
        let profile = data::default_profile();
        Self {
            tab: ProfileTab::default(),
            saved: profile.clone(),
            draft: profile,
        }
    }
}

impl ProfileForm {
    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn saved(&self) -> &UserProfile {
        &self.saved
    }

    /// Values currently typed in the form.
    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    pub fn edit(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.draft = UserProfile {
            name: name.into(),
            email: email.into(),
        };
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// Keep the draft. Nothing leaves the browser.
    pub fn submit(&mut self) {
        log::info!("Profile saved locally for {}", self.draft.email);
        self.saved = self.draft.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_then_submit() {
        let mut form = ProfileForm::default();
        assert_eq!(form.tab(), ProfileTab::Details);
        assert_eq!(form.draft().name, "John Doe");
        assert!(!form.is_dirty());

        form.edit("Jane Roe", "jane@example.com");
        assert!(form.is_dirty());
        assert_eq!(form.saved().name, "John Doe");

        form.submit();
        assert!(!form.is_dirty());
        assert_eq!(form.saved().email, "jane@example.com");
    }

    #[test]
    fn test_tab_switch() {
        let mut form = ProfileForm::default();
        form.select_tab(ProfileTab::Stats);
        assert_eq!(form.tab(), ProfileTab::Stats);
    }
}
