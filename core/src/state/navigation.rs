//! Which panel is visible.

use crate::models::NavigationTarget;

/// Current panel plus the mobile drawer flag.
///
/// There is no history stack: selection is purely cyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    current: NavigationTarget,
    drawer_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> NavigationTarget {
        self.current
    }

    pub fn is_active(&self, target: NavigationTarget) -> bool {
        self.current == target
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Select a panel unconditionally and close the drawer.
    ///
    /// Returns `false` when `target` was already the current panel.
    pub fn select(&mut self, target: NavigationTarget) -> bool {
        self.drawer_open = false;
        if self.current == target {
            return false;
        }
        log::debug!("Navigate {} -> {}", self.current, target);
        self.current = target;
        true
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }
}
